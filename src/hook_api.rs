//! Helpers for hooks written in Rust.
//!
//! ```no_run
//! use bakehook::hook_api::{get_context, put_context};
//!
//! let mut context = get_context(std::io::stdin().lock()).unwrap();
//! context.insert("generated".into(), true.into());
//! put_context(std::io::stdout().lock(), &context).unwrap();
//! ```

use std::io::{Read, Write};

use crate::context::Context;
use crate::error::Result;
use crate::serialization::SerializationFacade;

/// Reads the context a hook receives on stdin.
///
/// Accepts a `type|payload$` envelope as well as a plain JSON object.
pub fn get_context<R: Read>(mut reader: R) -> Result<Context> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    match SerializationFacade::new().deserialize(&input) {
        Ok(context) => Ok(context),
        Err(e) => serde_json::from_str(input.trim()).map_err(|_| e),
    }
}

/// Writes `context` as a JSON envelope followed by a newline.
///
/// The hook runner picks the JSON object out of the envelope.
pub fn put_context<W: Write>(mut writer: W, context: &Context) -> Result<()> {
    let envelope = SerializationFacade::new().serialize(context, None)?;
    writeln!(writer, "{}", envelope)?;
    Ok(())
}
