//! Reads batches of push/pop traces from the standard input and writes, for each one, which
//! data structure discipline produced it: the discipline's name, `brak pewnosci` if more than
//! one could have or `niemozliwe` if none could.
//!
//! Each batch is its operations count followed by that many `<code> <value>` pairs, where
//! `code` is `1` for pushes and `2` for pops:
//! ```text
//! $ echo "4  1 1  1 2  2 1  2 2" | structure-identifier
//! kolejka
//! ```

use structure_identifier::prelude::*;
use std::io::{self, BufWriter, Write};
use log::{error, info, warn, LevelFilter};
use structopt::StructOpt;


/// Metrics & a summary line per batch, when `--verbose`
const VERBOSE_INSTRUMENTS: usize = Instruments::MetricsWithDiagnostics.into();

#[derive(Debug, StructOpt)]
#[structopt(name = "structure-identifier", about = "Tells which data structure discipline is consistent with push/pop traces read from stdin")]
struct Options {
    /// Comma separated disciplines to test, in reporting order -- any of: stack, queue, max-priority-queue, min-priority-queue, fifo-deque.
    /// Defaults to `stack,queue,max-priority-queue`
    #[structopt(short, long, use_delimiter = true)]
    disciplines: Vec<Discipline>,

    /// Tests every known discipline
    #[structopt(short, long)]
    full: bool,

    /// Logs a summary of each identification & the final metrics
    #[structopt(short, long)]
    verbose: bool,
}

impl Options {
    fn disciplines(&self) -> Vec<Discipline> {
        if self.full {
            if !self.disciplines.is_empty() {
                warn!("`--full` was given: ignoring `--disciplines`");
            }
            StructureIdentifier::<i32>::with_all_structures().disciplines().collect()
        } else if self.disciplines.is_empty() {
            StructureIdentifier::<i32>::with_default_structures().disciplines().collect()
        } else {
            self.disciplines.clone()
        }
    }
}

fn main() {
    let options = Options::from_args();
    let log_level = if options.verbose { LevelFilter::Info } else { LevelFilter::Warn };
    simple_logger::SimpleLogger::new().with_utc_timestamps().with_level(log_level).init().unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));

    let disciplines = options.disciplines();
    let result = if options.verbose {
        run(StructureIdentifier::<i32, VERBOSE_INSTRUMENTS>::with_structures(disciplines))
    } else {
        run(StructureIdentifier::<i32>::with_structures(disciplines))
    };
    if let Err(err) = result {
        error!("structure-identifier: couldn't process the input: {err}");
        std::process::exit(1);
    }
}

fn run<const INSTRUMENTS: usize>(mut identifier: StructureIdentifier<i32, INSTRUMENTS>) -> Result<(), InputError> {
    let mut out = BufWriter::new(io::stdout().lock());
    let batches = identify_batches(io::stdin().lock(), &mut identifier, |identification| {
        writeln!(out, "{identification}")?;
        out.flush()
    })?;
    if Instruments::from(INSTRUMENTS).metrics() {
        info!("structure-identifier: {batches} batches processed with {:?}: {:?}",
              identifier.disciplines().map(Discipline::id).collect::<Vec<_>>(), identifier.metrics());
    }
    Ok(())
}


#[cfg(any(test,doc))]
mod tests {

    //! Unit tests for the command line options

    use super::*;
    use Discipline::*;


    fn disciplines_for(args: &[&str]) -> Vec<Discipline> {
        Options::from_iter(std::iter::once("structure-identifier").chain(args.iter().copied())).disciplines()
    }

    #[cfg_attr(not(doc),test)]
    fn default_disciplines() {
        assert_eq!(disciplines_for(&[]), vec![Stack, Queue, MaxPriorityQueue]);
    }

    #[cfg_attr(not(doc),test)]
    fn full_disciplines() {
        let all = vec![Stack, Queue, MaxPriorityQueue, MinPriorityQueue, FifoDeque];
        assert_eq!(disciplines_for(&["--full"]), all);
        assert_eq!(disciplines_for(&["--full", "-d", "stack"]), all, "`--full` should win over `--disciplines`");
    }

    #[cfg_attr(not(doc),test)]
    fn chosen_disciplines() {
        assert_eq!(disciplines_for(&["-d", "queue,stack"]), vec![Queue, Stack], "The given order should be kept");
        assert_eq!(disciplines_for(&["--disciplines", "min-priority-queue", "--disciplines", "fifo-deque"]), vec![MinPriorityQueue, FifoDeque]);
    }

    #[cfg_attr(not(doc),test)]
    fn unknown_discipline() {
        assert!(Options::from_iter_safe(["structure-identifier", "-d", "heap"]).is_err(), "unknown disciplines should be rejected");
    }

}
