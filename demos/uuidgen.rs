//! Simple command that prints one or '-n count' UUID strings of a given version
//!
//! Versions 3 and 5 require a name and take a namespace with '-s' (dns, url, oid, x500, or a
//! UUID string; defaults to dns).

use std::{env, io, io::Write, process::ExitCode};

use rfc4122::{namespace, Uuid};

#[derive(Debug, Default)]
struct Options {
    version: Option<u8>,
    count: Option<usize>,
    namespace: Option<Uuid>,
    name: Option<String>,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-v version] [-n count] [-s namespace] [name]",
                    program.as_deref().unwrap_or("uuidgen")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        match generate(&opts) {
            Ok(uuid) => writeln!(buf, "{}", uuid)?,
            Err(err) => {
                buf.flush()?;
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn generate(opts: &Options) -> Result<Uuid, rfc4122::Error> {
    let ns = opts.namespace.unwrap_or(namespace::DNS);
    let name = opts.name.as_deref().unwrap_or_default();
    match opts.version.unwrap_or(4) {
        1 => rfc4122::uuid1(),
        2 => rfc4122::uuid2(),
        3 => rfc4122::uuid3(&ns, name),
        5 => rfc4122::uuid5(&ns, name),
        _ => rfc4122::uuid4(),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" => {
                if opts.version.is_some() {
                    return Err("option 'v' given more than once".to_owned());
                }
                let Some(v_arg) = args.next() else {
                    return Err("argument to option 'v' missing".to_owned());
                };
                match v_arg.parse() {
                    Ok(v @ 1..=5) => opts.version = Some(v),
                    _ => return Err(format!("invalid argument to option 'v': '{}'", v_arg)),
                }
            }
            "-n" => {
                if opts.count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                opts.count = Some(c);
            }
            "-s" => {
                if opts.namespace.is_some() {
                    return Err("option 's' given more than once".to_owned());
                }
                let Some(s_arg) = args.next() else {
                    return Err("argument to option 's' missing".to_owned());
                };
                let Some(ns) = namespace::by_name(&s_arg).or_else(|| s_arg.parse().ok()) else {
                    return Err(format!("invalid argument to option 's': '{}'", s_arg));
                };
                opts.namespace = Some(ns);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("unrecognized argument '{}'", arg));
            }
            _ => {
                if opts.name.is_some() {
                    return Err("name given more than once".to_owned());
                }
                opts.name = Some(arg);
            }
        }
    }

    let takes_name = matches!(opts.version, Some(3 | 5));
    if takes_name && opts.name.is_none() {
        Err("versions 3 and 5 require a name".to_owned())
    } else if !takes_name && (opts.name.is_some() || opts.namespace.is_some()) {
        Err("only versions 3 and 5 take a name or namespace".to_owned())
    } else {
        Ok(opts)
    }
}
