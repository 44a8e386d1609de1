//! Company manager face description.

/// Company manager face.
///
/// `bits` only has a meaning together with `style`; decoding them belongs to
/// the face renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompanyManagerFace {
    /// Face style.
    pub style: u32,
    /// Face bits, interpreted per style.
    pub bits: u32,
    /// Face style label.
    pub style_label: String,
}

impl CompanyManagerFace {
    pub fn new(style: u32, bits: u32) -> Self {
        Self {
            style,
            bits,
            style_label: String::new(),
        }
    }

    /// Attaches a style label (builder pattern).
    #[must_use]
    pub fn with_style_label(mut self, label: impl Into<String>) -> Self {
        self.style_label = label.into();
        self
    }
}
