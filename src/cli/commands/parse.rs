//! Parse command implementation.

use anyhow::Result;
use signal_parser::SignalParser;

use super::parse_failure;
use crate::cli::{OutputFormat, ParseArgs};

pub fn run(args: ParseArgs) -> Result<()> {
    let raw = args.input.read()?;

    let signal = match SignalParser::new().parse(&raw) {
        Ok(signal) => signal,
        Err(e) => return Err(parse_failure(e)),
    };

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&signal)?),
        OutputFormat::Text => {
            println!("Date:        {}", signal.date);
            println!("Time:        {}", signal.time);
            println!("Instrument:  {}", signal.instrument);
            println!("Timeframe:   {}", signal.timeframe);
            println!("Description: {}", signal.description);
            println!("Timestamp:   {}", signal.timestamp_source);
        }
    }

    Ok(())
}
