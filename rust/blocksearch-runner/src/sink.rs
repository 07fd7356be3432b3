//! Results artifact writers.

use std::io::{self, Write};

use blocksearch_core::{ResultSink, SearchRecord};

/// `name,dimension,depth,nodes,elapsed` lines, no header.
pub struct CsvSink<W: Write> {
    out: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Self { Self { out } }

    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> ResultSink for CsvSink<W> {
    fn record(&mut self, record: &SearchRecord) -> io::Result<()> {
        writeln!(self.out, "{}", record.csv_line())?;
        self.out.flush()
    }
}

/// One JSON object per line.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self { Self { out } }

    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> ResultSink for JsonLinesSink<W> {
    fn record(&mut self, record: &SearchRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ResultFormat {
    Csv,
    #[value(name = "jsonl")]
    JsonLines,
}

impl ResultFormat {
    pub fn writer<W: Write>(self, out: W) -> ResultWriter<W> {
        match self {
            ResultFormat::Csv => ResultWriter::Csv(CsvSink::new(out)),
            ResultFormat::JsonLines => ResultWriter::JsonLines(JsonLinesSink::new(out)),
        }
    }
}

/// Sink picked at runtime from a [`ResultFormat`].
pub enum ResultWriter<W: Write> {
    Csv(CsvSink<W>),
    JsonLines(JsonLinesSink<W>),
}

impl<W: Write> ResultWriter<W> {
    pub fn into_inner(self) -> W {
        match self {
            ResultWriter::Csv(s) => s.into_inner(),
            ResultWriter::JsonLines(s) => s.into_inner(),
        }
    }
}

impl<W: Write> ResultSink for ResultWriter<W> {
    fn record(&mut self, record: &SearchRecord) -> io::Result<()> {
        match self {
            ResultWriter::Csv(s) => s.record(record),
            ResultWriter::JsonLines(s) => s.record(record),
        }
    }
}
