use std::fmt;

/// Service families recognised in raw train identifiers, in grammar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    S,
    Ice,
    Tha,
    Ic,
    Eur,
    Tgv,
    P,
    L,
    Extra,
    Bus,
}

impl ServiceKind {
    /// Match priority: earlier entries win when several rules fit at the
    /// same position.
    pub const ALL: [ServiceKind; 10] = [
        ServiceKind::S,
        ServiceKind::Ice,
        ServiceKind::Tha,
        ServiceKind::Ic,
        ServiceKind::Eur,
        ServiceKind::Tgv,
        ServiceKind::P,
        ServiceKind::L,
        ServiceKind::Extra,
        ServiceKind::Bus,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            ServiceKind::S => "S",
            ServiceKind::Ice => "ICE",
            ServiceKind::Tha => "THA",
            ServiceKind::Ic => "IC",
            ServiceKind::Eur => "EUR",
            ServiceKind::Tgv => "TGV",
            ServiceKind::P => "P",
            ServiceKind::L => "L",
            ServiceKind::Extra => "EXTRA",
            ServiceKind::Bus => "BUS",
        }
    }

    /// Only matches at the very start of the input.
    pub fn anchored(self) -> bool {
        matches!(self, ServiceKind::S)
    }

    /// Accepted digit count after the prefix, as `(min, max)`.
    pub fn digits(self) -> (usize, usize) {
        match self {
            ServiceKind::Ic | ServiceKind::P | ServiceKind::L => (3, 4),
            ServiceKind::Extra | ServiceKind::Bus => (5, 5),
            _ => (4, 4),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A service code found inside a larger string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainId<'a> {
    pub kind: ServiceKind,
    pub code: &'a str,
}

impl<'a> TrainId<'a> {
    /// Digits following the prefix.
    pub fn number(&self) -> &'a str {
        &self.code[self.kind.prefix().len()..]
    }
}

impl AsRef<str> for TrainId<'_> {
    fn as_ref(&self) -> &str {
        self.code
    }
}

impl fmt::Display for TrainId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_ranges() {
        assert_eq!(ServiceKind::Ic.digits(), (3, 4));
        assert_eq!(ServiceKind::Ice.digits(), (4, 4));
        assert_eq!(ServiceKind::Bus.digits(), (5, 5));
        assert_eq!(ServiceKind::L.digits(), (3, 4));
    }

    #[test]
    fn test_only_s_is_anchored() {
        let anchored: Vec<_> = ServiceKind::ALL.iter().filter(|k| k.anchored()).collect();
        assert_eq!(anchored, vec![&ServiceKind::S]);
    }

    #[test]
    fn test_train_id_parts() {
        let id = TrainId {
            kind: ServiceKind::Extra,
            code: "EXTRA12345",
        };
        assert_eq!(id.number(), "12345");
        assert_eq!(id.to_string(), "EXTRA12345");
        assert_eq!(id.kind.to_string(), "EXTRA");
    }
}
