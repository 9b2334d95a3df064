//! # mgplan-io: Power-Plant Dataset Ingestion
//!
//! Loads solar power-plant records from delimited files into the
//! [`mgplan_core::PowerPlant`] model.
//!
//! The source datasets carry one free-text metadata line above the header
//! row; [`load_plants`] skips it before handing the stream to the CSV
//! reader. The header must expose at least `latitude`, `longitude` and
//! `Total price` columns; anything else in the file is ignored.
//!
//! ```rust,no_run
//! fn main() -> anyhow::Result<()> {
//!     let plants = mgplan_io::load_plants("solar_plants.csv")?;
//!     println!("Loaded {} power plants", plants.len());
//!     Ok(())
//! }
//! ```

mod loader;

pub use loader::{load_plants, load_plants_from_reader};
