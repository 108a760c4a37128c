use crate::error::CliError;
use crate::util::*;
use argh::FromArgs;
use bytesize::ByteSize;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use pfnc_unpack_codec::{unpack, unpack_frame, SampleSequence};
use pfnc_unpack_formats::PixelFormatDescriptor;
#[cfg(feature = "multithreaded")]
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

#[derive(FromArgs, Debug)]
/// Unpack raw buffers of one pixel format into little-endian samples
#[argh(subcommand, name = "unpack")]
pub struct UnpackCmd {
    /// input directory path
    #[argh(option, from_str_fn(canonicalize_existing_path))]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub output: PathBuf,

    /// symbolic pixel format name of every input file, e.g. Mono12p
    #[argh(option)]
    pub format: String,

    /// frame width in pixels; requires every file to be exactly one frame
    #[argh(option)]
    pub width: Option<usize>,

    /// frame height in pixels
    #[argh(option)]
    pub height: Option<usize>,
}

/// Running totals shared between worker threads.
#[derive(Default)]
struct UnpackStats {
    bytes_read: AtomicU64,
    bytes_written: AtomicU64,
    failed: AtomicU64,
}

pub fn handle_unpack_command(cmd: UnpackCmd) -> Result<(), Box<dyn std::error::Error>> {
    let descriptor = lookup_format(&cmd.format)?;
    let dimensions = match (cmd.width, cmd.height) {
        (Some(width), Some(height)) => Some((width, height)),
        (None, None) => None,
        _ => return Err(CliError::IncompleteDimensions.into()),
    };

    let mut entries = Vec::new();
    find_all_files(&cmd.input, &mut entries)?;
    if entries.is_empty() {
        println!("No files found in input directory.");
        return Ok(());
    }
    println!("Found {} files to unpack as {descriptor}\n", entries.len());

    let start = Instant::now();
    let stats = UnpackStats::default();
    let process = |entry: &fs::DirEntry| {
        let result = process_file(entry, &cmd.input, &cmd.output, descriptor, dimensions, &stats);
        if result.is_err() {
            stats.failed.fetch_add(1, Ordering::Relaxed);
        }
        handle_process_entry_error(result);
    };

    #[cfg(feature = "multithreaded")]
    entries.par_iter().for_each(process);
    #[cfg(not(feature = "multithreaded"))]
    entries.iter().for_each(process);

    let elapsed = start.elapsed();
    let bytes_read = stats.bytes_read.load(Ordering::Relaxed);
    let bytes_written = stats.bytes_written.load(Ordering::Relaxed);
    let failed = stats.failed.load(Ordering::Relaxed);

    println!("\n=== Unpack Complete ===");
    println!("Files unpacked: {}", entries.len() as u64 - failed);
    if failed > 0 {
        println!("Files failed: {failed}");
    }
    println!("Time taken: {elapsed:.2?}");
    println!("Data read: {}", ByteSize(bytes_read));
    println!("Data written: {}", ByteSize(bytes_written));
    println!("Throughput: {}", Throughput::measure(bytes_read, elapsed));

    Ok(())
}

fn process_file(
    entry: &fs::DirEntry,
    input_dir: &Path,
    output_dir: &Path,
    descriptor: &PixelFormatDescriptor,
    dimensions: Option<(usize, usize)>,
    stats: &UnpackStats,
) -> Result<(), CliError> {
    let path = entry.path();
    let target_path = mirrored_path(&path, input_dir, output_dir);
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let input_handle = ReadOnlyFileHandle::open(&path)?;
    let input_size = input_handle.size()? as usize;
    // Zero length mappings are rejected by the OS.
    let input_mapping = match input_size {
        0 => None,
        len => Some(ReadOnlyMmap::new(&input_handle, 0, len)?),
    };
    let raw = input_mapping.as_ref().map_or(&[][..], |mapping| mapping.as_slice());
    stats.bytes_read.fetch_add(input_size as u64, Ordering::Relaxed);

    let sequence = match dimensions {
        Some((width, height)) => unpack_frame(descriptor, raw, width, height),
        None => unpack(descriptor, raw),
    }
    .map_err(|source| CliError::Unpack {
        path: path.clone(),
        source,
    })?;

    write_sequence(&sequence, &target_path)?;
    stats
        .bytes_written
        .fetch_add(sequence.byte_len() as u64, Ordering::Relaxed);
    Ok(())
}

fn write_sequence(sequence: &SampleSequence, target_path: &Path) -> Result<(), CliError> {
    let output_len = sequence.byte_len();
    if output_len == 0 {
        fs::File::create(target_path)?;
        return Ok(());
    }

    let output_handle = ReadWriteFileHandle::create_preallocated(target_path, output_len as i64)?;
    let mut output_mapping = ReadWriteMmap::new(&output_handle, 0, output_len)?;
    sequence
        .write_le_bytes(output_mapping.as_mut_slice())
        .map_err(|source| CliError::Unpack {
            path: target_path.to_path_buf(),
            source,
        })
}
