use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{Module, ShaderStage};

use crate::error::SetupError;

/// Parses and validates WGSL source, returning the IR module.
///
/// wgpu would panic inside `create_shader_module` on bad source; running the
/// same front end up front turns that into a reportable error carrying the
/// compiler's diagnostic log.
pub fn compile(source: &str) -> Result<Module, SetupError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|err| SetupError::ShaderCompileFailed(err.emit_to_string(source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|err| SetupError::ShaderCompileFailed(format!("{:?}", err)))?;

    Ok(module)
}

/// Checks that the entry points a pipeline is about to name actually exist
/// with the right stages. This is the link step: a pipeline descriptor with a
/// missing entry point would otherwise fail deep inside the driver.
pub fn verify_entry_points(
    module: &Module,
    vertex: &str,
    fragment: &str,
) -> Result<(), SetupError> {
    find_entry_point(module, vertex, ShaderStage::Vertex)?;
    find_entry_point(module, fragment, ShaderStage::Fragment)?;
    Ok(())
}

fn find_entry_point(module: &Module, name: &str, stage: ShaderStage) -> Result<(), SetupError> {
    module
        .entry_points
        .iter()
        .find(|ep| ep.name == name && ep.stage == stage)
        .map(|_| ())
        .ok_or_else(|| {
            SetupError::ProgramLinkFailed(format!(
                "no {:?} entry point named `{}` in shader module",
                stage, name
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::trophy::{ColorMode, SHADER_SOURCE};

    #[test]
    fn embedded_shader_compiles() {
        compile(SHADER_SOURCE).expect("embedded WGSL must be valid");
    }

    #[test]
    fn malformed_source_reports_compile_log() {
        let err = compile("fn vs_main( {").unwrap_err();
        match err {
            SetupError::ShaderCompileFailed(log) => assert!(!log.is_empty()),
            other => panic!("expected ShaderCompileFailed, got {:?}", other),
        }
    }

    #[test]
    fn both_color_modes_link() {
        let module = compile(SHADER_SOURCE).unwrap();
        for mode in [ColorMode::Grayscale, ColorMode::RedTint] {
            verify_entry_points(&module, "vs_main", mode.fragment_entry_point()).unwrap();
        }
    }

    #[test]
    fn unknown_fragment_entry_fails_link() {
        let module = compile(SHADER_SOURCE).unwrap();
        let err = verify_entry_points(&module, "vs_main", "fs_missing").unwrap_err();
        assert!(matches!(err, SetupError::ProgramLinkFailed(_)));
    }

    #[test]
    fn stage_mismatch_fails_link() {
        let module = compile(SHADER_SOURCE).unwrap();
        // fs_white exists, but not as a vertex stage.
        let err = verify_entry_points(&module, "fs_white", "fs_red").unwrap_err();
        assert!(matches!(err, SetupError::ProgramLinkFailed(_)));
    }
}
