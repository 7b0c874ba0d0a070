//! GridQuest engine as a WASM module for browser and service hosts.
//!
//! Every export takes and returns JSON strings, so the host only needs
//! `JSON.parse`/`JSON.stringify`. Malformed input never panics; it comes
//! back as `{ "error": "..." }`.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { run, hint } from 'gridquest-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(run(levelJson, JSON.stringify(program), '{"captureLog":true}'));
//! // { success: true, steps: 5, stars: 3, remainingCollectibles: 0, log: [...], ... }
//!
//! const { hint: text } = JSON.parse(hint(levelJson, JSON.stringify({ attempts: 2, lastError: result.errorCode })));
//! ```
//!
//! The `*_json` functions are the same entry points with a Rust error type,
//! for native hosts and tests.

mod error;

pub use error::{FacadeError, FacadeResult};

use gridquest_engine::{
    compute_hint, disallowed_blocks, instruction_count, nesting_depth, HintRequest,
    LevelSimulator, SimulationOptions,
};
use gridquest_types::{BlockKind, ErrorCode, Instruction, LevelDefinition};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// Wire shapes
// ══════════════════════════════════════════════════════════════════════════════

/// Hint request as sent by clients. An unrecognised `lastError` is
/// treated as absent rather than rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HintPayload {
    #[serde(default)]
    attempts: u32,
    #[serde(default)]
    last_error: Option<String>,
}

#[derive(Debug, Serialize)]
struct HintResponse {
    hint: String,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgramReport {
    disallowed_blocks: Vec<BlockKind>,
    nesting_depth: usize,
    instruction_count: usize,
}

// ══════════════════════════════════════════════════════════════════════════════
// Native entry points
// ══════════════════════════════════════════════════════════════════════════════

fn parse_level(level_json: &str) -> FacadeResult<LevelDefinition> {
    serde_json::from_str(level_json).map_err(FacadeError::Level)
}

fn parse_program(program_json: &str) -> FacadeResult<Vec<Instruction>> {
    serde_json::from_str(program_json).map_err(FacadeError::Program)
}

/// Empty input and `null` both mean default options.
fn parse_options(options_json: &str) -> FacadeResult<SimulationOptions> {
    if options_json.trim().is_empty() {
        return Ok(SimulationOptions::default());
    }
    serde_json::from_str::<Option<SimulationOptions>>(options_json)
        .map(Option::unwrap_or_default)
        .map_err(FacadeError::Options)
}

fn encode<T: Serialize>(value: &T) -> FacadeResult<String> {
    serde_json::to_string(value).map_err(FacadeError::Encode)
}

/// Run a program against a level and return the serialized result.
pub fn run_json(
    level_json: &str,
    program_json: &str,
    options_json: &str,
) -> FacadeResult<String> {
    let level = parse_level(level_json)?;
    let program = parse_program(program_json)?;
    let options = parse_options(options_json)?;
    let result = LevelSimulator::new(&level).run(&program, &options);
    encode(&result)
}

/// Compute a hint. Returns `{"hint": "..."}`.
pub fn hint_json(level_json: &str, payload_json: &str) -> FacadeResult<String> {
    let level = parse_level(level_json)?;
    let payload: HintPayload =
        serde_json::from_str(payload_json).map_err(FacadeError::HintRequest)?;
    let request = HintRequest::new(
        payload.attempts,
        payload
            .last_error
            .as_deref()
            .and_then(|code| code.parse::<ErrorCode>().ok()),
    );
    encode(&HintResponse {
        hint: compute_hint(&level, &request),
    })
}

/// Check a level's structural invariants.
///
/// A level that decodes but breaks an invariant is a normal response
/// (`{"valid": false, "error": ...}`); only undecodable input is an `Err`.
pub fn validate_level_json(level_json: &str) -> FacadeResult<String> {
    let level = parse_level(level_json)?;
    let response = match level.validate() {
        Ok(()) => ValidationResponse {
            valid: true,
            error: None,
        },
        Err(e) => ValidationResponse {
            valid: false,
            error: Some(e.to_string()),
        },
    };
    encode(&response)
}

/// Static report on a program for the block editor: palette violations,
/// nesting depth and size.
pub fn check_program_json(level_json: &str, program_json: &str) -> FacadeResult<String> {
    let level = parse_level(level_json)?;
    let program = parse_program(program_json)?;
    encode(&ProgramReport {
        disallowed_blocks: disallowed_blocks(&program, level.allowed_blocks.as_deref()),
        nesting_depth: nesting_depth(&program),
        instruction_count: instruction_count(&program),
    })
}

fn respond(result: FacadeResult<String>) -> String {
    result.unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
}

// ══════════════════════════════════════════════════════════════════════════════
// WASM exports
// ══════════════════════════════════════════════════════════════════════════════

/// Run a program. `options_json` may be empty for defaults.
#[wasm_bindgen]
pub fn run(level_json: &str, program_json: &str, options_json: &str) -> String {
    respond(run_json(level_json, program_json, options_json))
}

/// Compute a hint from `{ attempts, lastError? }`.
#[wasm_bindgen]
pub fn hint(level_json: &str, payload_json: &str) -> String {
    respond(hint_json(level_json, payload_json))
}

/// Validate a level definition.
#[wasm_bindgen]
pub fn validate_level(level_json: &str) -> String {
    respond(validate_level_json(level_json))
}

/// Inspect a program without running it.
#[wasm_bindgen]
pub fn check_program(level_json: &str, program_json: &str) -> String {
    respond(check_program_json(level_json, program_json))
}

/// Return the engine version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
