/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Request, SimError, TickSnapshot};

/***************************************/
/*          Request records            */
/***************************************/
/// Parses one JSON request object per line. Blank lines are skipped.
pub fn parse_requests<R: BufRead>(reader: R) -> Result<Vec<Request>, SimError> {
    let mut requests = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request = serde_json::from_str::<Request>(&line).map_err(|source| SimError::Record {
            line: index + 1,
            source,
        })?;
        requests.push(request);
    }
    Ok(requests)
}

pub fn read_requests<P: AsRef<Path>>(path: P) -> Result<Vec<Request>, SimError> {
    let file = fs::File::open(path)?;
    parse_requests(BufReader::new(file))
}

pub fn write_requests<P: AsRef<Path>>(path: P, requests: &[Request]) -> Result<(), SimError> {
    let mut file = BufWriter::new(fs::File::create(path)?);
    for request in requests {
        serde_json::to_writer(&mut file, request)?;
        file.write_all(b"\n")?;
    }
    file.flush()?;
    Ok(())
}

/***************************************/
/*            Tick log                 */
/***************************************/
/// Writes the log as a JSON array indented by four spaces.
pub fn write_log_to<W: Write>(writer: W, log: &[TickSnapshot]) -> Result<(), SimError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    log.serialize(&mut serializer)?;
    Ok(())
}

pub fn write_log<P: AsRef<Path>>(path: P, log: &[TickSnapshot]) -> Result<(), SimError> {
    let mut file = BufWriter::new(fs::File::create(path)?);
    write_log_to(&mut file, log)?;
    file.flush()?;
    Ok(())
}

pub fn read_log<P: AsRef<Path>>(path: P) -> Result<Vec<TickSnapshot>, SimError> {
    let file = fs::File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
