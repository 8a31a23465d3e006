/// Named curve identifiers for the a = 0 Koblitz curves over prime fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EccCurveId {
    Secp192k1,
    Secp256k1,
}

impl EccCurveId {
    /// Bit width of the underlying prime field.
    pub fn field_bits(self) -> usize {
        match self {
            EccCurveId::Secp192k1 => 192,
            EccCurveId::Secp256k1 => 256,
        }
    }

    /// Number of 32-bit words in a reduced field element.
    pub fn field_words(self) -> usize {
        self.field_bits() / 32
    }

    /// SEC 2 name of the curve.
    pub fn name(self) -> &'static str {
        match self {
            EccCurveId::Secp192k1 => "secp192k1",
            EccCurveId::Secp256k1 => "secp256k1",
        }
    }
}

impl std::fmt::Display for EccCurveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_words() {
        assert_eq!(EccCurveId::Secp192k1.field_words(), 6);
        assert_eq!(EccCurveId::Secp256k1.field_words(), 8);
    }

    #[test]
    fn test_display() {
        assert_eq!(EccCurveId::Secp256k1.to_string(), "secp256k1");
    }
}
