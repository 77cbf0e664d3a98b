use std::{ffi::OsString, time::Duration};

use anyhow::anyhow;
use clap::{error::ErrorKind, Parser};
use log::LevelFilter;
use sizefmt::{
    format_remaining_time, format_speed, format_speed_over, ByteSize, NumericFormat,
    UnitConvention,
};

use crate::cli::Args;

#[derive(Debug)]
pub struct Config {
    pub command: Command,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(itr) {
            Ok(args) => Ok(args.try_into()?),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.exit()
            }
            Err(err) => Err(anyhow!("error parsing arguments into Config: {}", err)),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Format {
        size: ByteSize,
        numeric: NumericFormat,
        convention: UnitConvention,
    },
    Parse {
        text: String,
        decimal_dot_is_point: bool,
    },
    Speed {
        bytes: i64,
        elapsed: Option<Duration>,
    },
    Eta {
        processed: i64,
        total: i64,
        elapsed: Duration,
    },
}

impl Command {
    pub fn run(&self) -> anyhow::Result<String> {
        match self {
            Self::Format {
                size,
                numeric,
                convention,
            } => Ok(size.to_string_as(numeric, *convention)),
            Self::Parse {
                text,
                decimal_dot_is_point,
            } => {
                let size = ByteSize::parse_with(text, *decimal_dot_is_point)
                    .map_err(|err| anyhow!("error parsing {:?}: {}", text, err))?;
                Ok(size.bytes().to_string())
            }
            Self::Speed {
                bytes,
                elapsed: None,
            } => Ok(format_speed(*bytes)),
            Self::Speed {
                bytes,
                elapsed: Some(elapsed),
            } => {
                let speed = format_speed_over(*bytes, *elapsed);
                if speed.is_empty() {
                    Err(anyhow!("speed of {} bytes over {:?} is out of range", bytes, elapsed))
                } else {
                    Ok(speed)
                }
            }
            Self::Eta {
                processed,
                total,
                elapsed,
            } => Ok(format_remaining_time(*processed, *total, *elapsed)),
        }
    }
}
