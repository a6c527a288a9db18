//! Export helpers for CSV and JSON artifacts.

pub mod segments {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str =
        "segment_index,heading_deg,relative_angle_deg,headwind_pct,tailwind_pct,crosswind_pct";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard per-segment CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted per path segment.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub segment_index: usize,
        pub heading_deg: i32,
        pub relative_angle_deg: f64,
        pub headwind_pct: f64,
        pub tailwind_pct: f64,
        pub crosswind_pct: f64,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header
        /// ordering. Angle and percentages keep two decimal places.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{:.2},{:.2},{:.2},{:.2}",
                self.segment_index,
                self.heading_deg,
                self.relative_angle_deg,
                self.headwind_pct,
                self.tailwind_pct,
                self.crosswind_pct,
            )
        }
    }
}

pub mod summary {
    use chrono::{SecondsFormat, Utc};
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Whole-path aggregate written as a JSON sidecar next to the CSV table.
    #[derive(Debug, Serialize)]
    pub struct Summary {
        pub generated_utc: String,
        pub segment_count: usize,
        pub temperature_c: f64,
        pub wind_speed_ms: f64,
        pub headwind_pct: f64,
        pub tailwind_pct: f64,
        pub crosswind_pct: f64,
    }

    /// RFC 3339 UTC timestamp at seconds resolution for sidecar stamping.
    pub fn timestamp_utc() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Write the JSON sidecar, creating parent directories as needed.
    pub fn write_sidecar(path: &Path, summary: &Summary) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
