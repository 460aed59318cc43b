use crate::core::{find_by_identifier, load_catalog, resolve_prerequisites, sort_by_identifier};
use crate::domain::model::Course;
use crate::utils::error::{CatalogError, Result};
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Load,
    List,
    Show,
    Exit,
    Invalid,
}

impl MenuChoice {
    // Line-wise parse; any non-numeric or unknown input is simply Invalid,
    // so bad input can never wedge the loop.
    fn from_input(input: &str) -> Self {
        match input.trim().parse::<u32>() {
            Ok(1) => Self::Load,
            Ok(2) => Self::List,
            Ok(3) => Self::Show,
            Ok(9) => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Interactive menu session. Owns the catalog for its lifetime and is
/// generic over its I/O so tests can drive it with in-memory buffers.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    catalog: Vec<Course>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            catalog: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    /// Runs the menu loop until the user exits or input reaches EOF.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "Menu:")?;
            writeln!(self.output, "  1) Load data structure")?;
            writeln!(self.output, "  2) Print course list")?;
            writeln!(self.output, "  3) Print course")?;
            writeln!(self.output, "  9) Exit")?;

            let Some(selection) = self.read_line()? else {
                break;
            };

            match MenuChoice::from_input(&selection) {
                MenuChoice::Load => self.load()?,
                MenuChoice::List => self.list()?,
                MenuChoice::Show => self.show()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Have a good day!")?;
                    break;
                }
                MenuChoice::Invalid => {
                    writeln!(self.output, "Invalid option selected.")?;
                }
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn load(&mut self) -> Result<()> {
        writeln!(self.output, "Enter the data file name to load:")?;
        let Some(path) = self.read_line()? else {
            return Ok(());
        };
        self.load_from(Path::new(path.trim()))
    }

    /// Loads `path` into a fresh collection and swaps it in only on
    /// success, so a failed load leaves the previous catalog intact.
    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        match load_catalog(path) {
            Ok(catalog) => {
                tracing::info!("Loaded {} courses from {}", catalog.len(), path.display());
                writeln!(self.output, "{} courses loaded.", catalog.len())?;
                self.catalog = catalog;
            }
            Err(err @ (CatalogError::FileNotFound { .. } | CatalogError::FileUnreadable { .. })) => {
                tracing::warn!("Load failed: {}", err);
                writeln!(self.output, "Unable to open the file {}", path.display())?;
            }
            Err(err) => {
                tracing::warn!("Load failed: {}", err);
                writeln!(self.output, "Unable to load {}: {}", path.display(), err)?;
            }
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(self.output, "No courses available.")?;
            return Ok(());
        }

        tracing::info!("Listing {} courses", self.catalog.len());
        sort_by_identifier(&mut self.catalog);

        writeln!(self.output, "Courses:")?;
        for course in &self.catalog {
            writeln!(self.output, "{:>8}  {:<35}", course.identifier, course.title)?;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(self.output, "No courses available.")?;
            return Ok(());
        }

        writeln!(self.output, "What course do you want to know about?")?;
        let Some(query) = self.read_line()? else {
            return Ok(());
        };
        let query = query.trim();

        let Some(course) = find_by_identifier(&self.catalog, query) else {
            tracing::info!("No course matches {:?}", query);
            writeln!(self.output, "Selected course not found.")?;
            return Ok(());
        };

        writeln!(self.output, "{}: {}", course.identifier, course.title)?;

        let resolved = resolve_prerequisites(&self.catalog, course);
        if resolved.is_empty() {
            writeln!(self.output, "Prerequisites: none")?;
            return Ok(());
        }

        writeln!(self.output, "Prerequisites:")?;
        for prerequisite in resolved {
            match prerequisite.title {
                Some(title) => {
                    writeln!(self.output, "  {}: {}", prerequisite.identifier, title)?;
                }
                None => {
                    writeln!(self.output, "Warning: unknown course {}", prerequisite.identifier)?;
                }
            }
        }
        Ok(())
    }
}
