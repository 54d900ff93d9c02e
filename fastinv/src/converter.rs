use crate::options::{ConvertOptions, SchemaProfile};

/// Entry point of a conversion. Holds the options for one run; the
/// serializers themselves are spread over the modules that define their
/// output records.
///
/// ```no_run
/// # use fastinv::{Converter, ConvertOptions};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let buf: Vec<u8> = std::fs::read("player.nbt")?;
/// let root: fastinv::Value = fastnbt::from_bytes(&buf)?;
///
/// let snapshot = Converter::new(ConvertOptions::default()).player(&root, "world")?;
/// println!("{}", serde_json::to_string(&snapshot)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn schema(&self) -> &SchemaProfile {
        &self.options.schema
    }
}
