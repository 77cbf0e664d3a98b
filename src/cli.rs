use std::time::Duration;

use anyhow::anyhow;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use sizefmt::{ByteSize, NumericFormat, UnitConvention};

use crate::config::{Command, Config};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(name = "verbose", long = "verbose", short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// Format a byte count, e.g. `52428800` -> `50.0 MB`
    Format {
        #[arg(allow_negative_numbers = true)]
        bytes: i64,

        #[arg(name = "si", long = "si", conflicts_with = "iec")]
        si: bool,
        #[arg(name = "iec", long = "iec", alias = "binary", conflicts_with = "si")]
        iec: bool,

        #[arg(
            name = "format",
            long = "format",
            short = 'f',
            default_value = NumericFormat::DEFAULT_PATTERN
        )]
        format: String,
    },

    /// Parse a size, e.g. `50 MB` -> `52428800`
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[arg(
            name = "comma-decimal",
            long = "comma-decimal",
            short = 'c',
            aliases = vec!["comma", "decimal-comma"]
        )]
        comma_decimal: bool,
    },

    /// Format a transfer speed, optionally averaged over elapsed seconds
    Speed {
        #[arg(allow_negative_numbers = true)]
        bytes: i64,

        #[arg(name = "seconds", long = "seconds", short = 's')]
        seconds: Option<f64>,
    },

    /// Estimate the time left from processed/total bytes and elapsed seconds
    Eta {
        #[arg(allow_negative_numbers = true)]
        processed: i64,
        #[arg(allow_negative_numbers = true)]
        total: i64,
        elapsed_secs: f64,
    },
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let log_level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        let command = match self.action {
            Action::Format {
                bytes,
                si,
                iec,
                format,
            } => {
                let convention = if si {
                    UnitConvention::SI
                } else if iec {
                    UnitConvention::IEC
                } else {
                    UnitConvention::JEDEC
                };

                Command::Format {
                    size: ByteSize::new(bytes),
                    numeric: format.parse()?,
                    convention,
                }
            }
            Action::Parse {
                text,
                comma_decimal,
            } => Command::Parse {
                text,
                decimal_dot_is_point: !comma_decimal,
            },
            Action::Speed { bytes, seconds } => Command::Speed {
                bytes,
                elapsed: seconds.map(seconds_to_duration).transpose()?,
            },
            Action::Eta {
                processed,
                total,
                elapsed_secs,
            } => Command::Eta {
                processed,
                total,
                elapsed: seconds_to_duration(elapsed_secs)?,
            },
        };

        Ok(Config { command, log_level })
    }
}

fn seconds_to_duration(secs: f64) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|err| anyhow!("invalid elapsed time {}: {}", secs, err))
}
