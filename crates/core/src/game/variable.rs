//! Declared game variables and their Game-Boy-faithful storage types.

/// A scalar storage width — the element type of an array, or a plain
/// variable's own type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    U8,
    U16,
    I8,
    I16,
}

impl ScalarType {
    pub fn domain(self) -> (i64, i64) {
        match self {
            ScalarType::U8 => (0, 255),
            ScalarType::U16 => (0, 65535),
            ScalarType::I8 => (-128, 127),
            ScalarType::I16 => (-32768, 32767),
        }
    }

    pub fn contains(self, value: i64) -> bool {
        let (min, max) = self.domain();
        (min..=max).contains(&value)
    }

    /// Size in bytes of one element of this scalar type, used by the code
    /// generator to pick the matching C storage type.
    pub fn size_bytes(self) -> usize {
        match self {
            ScalarType::U8 | ScalarType::I8 => 1,
            ScalarType::U16 | ScalarType::I16 => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Scalar(ScalarType),
    Array { elem: ScalarType, len: usize },
}

impl VarType {
    pub fn u8() -> Self {
        VarType::Scalar(ScalarType::U8)
    }

    pub fn u16() -> Self {
        VarType::Scalar(ScalarType::U16)
    }

    pub fn i8() -> Self {
        VarType::Scalar(ScalarType::I8)
    }

    pub fn i16() -> Self {
        VarType::Scalar(ScalarType::I16)
    }

    pub fn array(elem: ScalarType, len: usize) -> Self {
        VarType::Array { elem, len }
    }

    /// The scalar domain a single element (or the whole value, for a
    /// non-array variable) must stay inside.
    pub fn element_domain(self) -> (i64, i64) {
        match self {
            VarType::Scalar(s) => s.domain(),
            VarType::Array { elem, .. } => elem.domain(),
        }
    }

    pub fn array_len(self) -> Option<usize> {
        match self {
            VarType::Array { len, .. } => Some(len),
            VarType::Scalar(_) => None,
        }
    }
}

/// A variable's initial value, shaped to match its [`VarType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialValue {
    Scalar(i64),
    Array(Vec<i64>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GBVar {
    pub name: String,
    pub ty: VarType,
    pub initial: InitialValue,
}

impl GBVar {
    pub fn scalar(name: impl Into<String>, ty: ScalarType, initial: i64) -> Self {
        Self { name: name.into(), ty: VarType::Scalar(ty), initial: InitialValue::Scalar(initial) }
    }

    pub fn array(name: impl Into<String>, elem: ScalarType, initial: Vec<i64>) -> Self {
        let len = initial.len();
        Self {
            name: name.into(),
            ty: VarType::Array { elem, len },
            initial: InitialValue::Array(initial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_domains_match_spec() {
        assert_eq!(ScalarType::U8.domain(), (0, 255));
        assert_eq!(ScalarType::I8.domain(), (-128, 127));
        assert_eq!(ScalarType::U16.domain(), (0, 65535));
        assert_eq!(ScalarType::I16.domain(), (-32768, 32767));
    }

    #[test]
    fn array_len_is_recorded_from_initial() {
        let v = GBVar::array("inventory", ScalarType::U8, vec![0, 0, 0]);
        assert_eq!(v.ty.array_len(), Some(3));
    }
}
