//! # CLI - StrataIndex Interactive Shell
//!
//! A REPL-style command-line interface for the StrataIndex engines. Reads
//! commands from stdin, executes them against the configured engine, and
//! prints results to stdout. Designed for both interactive use and scripted
//! testing (pipe commands via stdin).
//!
//! ## Commands
//!
//! ```text
//! SET key value   Insert a new version for key
//! GET key         Look up the latest value (prints value or "(nil)")
//! ASOF key g      Value as of generation g        (chunked engine only)
//! AT key i        Version i for key               (history engine only)
//! HIST key        Number of recorded versions     (history engine only)
//! STATS           Print engine summary
//! EXIT / QUIT     Shut down
//! ```
//!
//! ## Configuration
//!
//! All settings are controlled via environment variables:
//!
//! ```text
//! STRATA_ENGINE   engine to drive: flat | chunked | history (default: chunked)
//! STRATA_GEN_CAP  generation capacity for chunked           (default: 10000)
//! ```
//!
//! ## Example
//!
//! ```text
//! $ STRATA_ENGINE=history cargo run -p cli
//! StrataIndex started (engine=history)
//! > SET name Alice
//! OK
//! > SET name Bob
//! OK
//! > HIST name
//! 2
//! > AT name 0
//! Alice
//! > EXIT
//! bye
//! ```

use anyhow::Result;
use config::{DriverConfig, EngineKind};
use engine::{ChunkedIndex, FlatIndex, HistoryIndex};
use std::io::{self, BufRead, Write};

/// The engine under the REPL, chosen once at startup.
enum Driver {
    Flat(FlatIndex<String, String>),
    Chunked(ChunkedIndex<String, String>),
    History(HistoryIndex<String, String>),
}

impl Driver {
    fn build(cfg: &DriverConfig) -> Result<Self> {
        Ok(match cfg.engine {
            EngineKind::Flat => Self::Flat(FlatIndex::new()),
            EngineKind::Chunked => Self::Chunked(ChunkedIndex::new(cfg.generation_capacity)?),
            EngineKind::History => Self::History(HistoryIndex::new()),
        })
    }

    fn insert(&mut self, key: String, value: String) {
        match self {
            Self::Flat(idx) => idx.insert(key, value),
            Self::Chunked(idx) => idx.insert(key, value),
            Self::History(idx) => idx.insert(key, value),
        }
    }

    fn lookup_latest(&self, key: &String) -> Option<&String> {
        match self {
            Self::Flat(idx) => idx.lookup(key),
            Self::Chunked(idx) => idx.lookup_latest(key),
            Self::History(idx) => idx.lookup_latest(key),
        }
    }

    fn stats(&self) -> String {
        match self {
            Self::Flat(idx) => format!("engine=flat keys={}", idx.len()),
            Self::Chunked(idx) => format!(
                "engine=chunked bindings={} generations={} capacity={}",
                idx.len(),
                idx.generation_count(),
                idx.capacity()
            ),
            Self::History(idx) => format!(
                "engine=history versions={} keys={}",
                idx.len(),
                idx.key_count()
            ),
        }
    }
}

fn main() -> Result<()> {
    let cfg = DriverConfig::from_env();
    let mut driver = Driver::build(&cfg)?;

    println!("StrataIndex started (engine={})", cfg.engine.name());
    println!("Commands: SET key value | GET key | ASOF key g | AT key i");
    println!("          HIST key | STATS | EXIT");
    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        if let Some(cmd) = parts.next() {
            match cmd.to_uppercase().as_str() {
                "SET" => {
                    if let Some(k) = parts.next() {
                        let v: String = parts.collect::<Vec<&str>>().join(" ");
                        if v.is_empty() {
                            println!("ERR usage: SET key value");
                        } else {
                            driver.insert(k.to_string(), v);
                            println!("OK");
                        }
                    } else {
                        println!("ERR usage: SET key value");
                    }
                }
                "GET" => {
                    if let Some(k) = parts.next() {
                        match driver.lookup_latest(&k.to_string()) {
                            Some(v) => println!("{}", v),
                            None => println!("(nil)"),
                        }
                    } else {
                        println!("ERR usage: GET key");
                    }
                }
                "ASOF" => match (parts.next(), parts.next()) {
                    (Some(k), Some(g)) => {
                        let Driver::Chunked(idx) = &driver else {
                            println!("ERR ASOF needs the chunked engine");
                            print!("> ");
                            io::stdout().flush().ok();
                            continue;
                        };
                        match g.parse::<usize>() {
                            Ok(g) => match idx.lookup_as_of(&k.to_string(), g) {
                                Ok(Some(v)) => println!("{}", v),
                                Ok(None) => println!("(nil)"),
                                Err(e) => println!("ERR {}", e),
                            },
                            Err(_) => println!("ERR usage: ASOF key generation"),
                        }
                    }
                    _ => println!("ERR usage: ASOF key generation"),
                },
                "AT" => match (parts.next(), parts.next()) {
                    (Some(k), Some(i)) => {
                        let Driver::History(idx) = &driver else {
                            println!("ERR AT needs the history engine");
                            print!("> ");
                            io::stdout().flush().ok();
                            continue;
                        };
                        match i.parse::<usize>() {
                            Ok(i) => match idx.lookup_at(&k.to_string(), i) {
                                Ok(Some(v)) => println!("{}", v),
                                Ok(None) => println!("(nil)"),
                                Err(e) => println!("ERR {}", e),
                            },
                            Err(_) => println!("ERR usage: AT key version"),
                        }
                    }
                    _ => println!("ERR usage: AT key version"),
                },
                "HIST" => {
                    if let Some(k) = parts.next() {
                        match &driver {
                            Driver::History(idx) => {
                                println!("{}", idx.history_length(&k.to_string()))
                            }
                            _ => println!("ERR HIST needs the history engine"),
                        }
                    } else {
                        println!("ERR usage: HIST key");
                    }
                }
                "STATS" => println!("{}", driver.stats()),
                "EXIT" | "QUIT" => {
                    println!("bye");
                    break;
                }
                other => println!("ERR unknown command: {}", other),
            }
        }
        print!("> ");
        io::stdout().flush().ok();
    }

    Ok(())
}
