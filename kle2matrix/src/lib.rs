pub mod board;
pub mod error;

pub use kle_core;
pub use kle_core::{compile_matrix, CompiledMatrix, KleError, MatrixConfig, Netlist, RawLayout};
pub use board::{BoardConfig, ControllerConfig};
pub use error::ConvertError;

use std::fs::{read_to_string, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn convert_kle_to_netlist(
    input_path: &Path,
    output_path: &Path,
    board: &BoardConfig,
) -> Result<Netlist, ConvertError> {
    // Compile layout
    let compiled = compile_kle_file(input_path, &board.matrix)?;
    let netlist = build_netlist(&compiled, board);

    // Write output
    let file = File::create(output_path).map_err(|e| ConvertError::io(output_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &netlist).map_err(|e| {
        if e.is_io() {
            ConvertError::io(output_path, e.into())
        } else {
            ConvertError::Encode(e)
        }
    })?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::io(output_path, e))?;

    Ok(netlist)
}

pub fn compile_kle_file(
    input_path: &Path,
    config: &MatrixConfig,
) -> Result<CompiledMatrix, ConvertError> {
    let input = read_source(input_path)?;
    compile_kle(&input, config)
}

pub fn compile_kle(input: &str, config: &MatrixConfig) -> Result<CompiledMatrix, ConvertError> {
    let layout = RawLayout::from_json(input)?;
    Ok(compile_matrix(&layout, config)?)
}

/// Renders the matrix, then the controller if the board has one.
pub fn build_netlist(compiled: &CompiledMatrix, board: &BoardConfig) -> Netlist {
    let mut netlist = Netlist::new();
    compiled.render(&mut netlist);
    if let Some(controller) = &board.controller {
        controller.render(&mut netlist);
    }
    netlist
}

/// Reads a text input, dropping a UTF-8 BOM if present.
pub fn read_source(path: &Path) -> Result<String, ConvertError> {
    let content = read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    Ok(match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}
