use super::*;
use crate::data::err::EncodingError;

// Conversion
impl AsRef<[u8]> for Nucleotides {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<String> for Nucleotides {
    fn from(s: String) -> Self {
        Nucleotides(s.into_bytes())
    }
}

impl From<Vec<u8>> for Nucleotides {
    fn from(vec: Vec<u8>) -> Self {
        Nucleotides(vec)
    }
}

impl From<&[u8]> for Nucleotides {
    fn from(bytes: &[u8]) -> Self {
        Nucleotides(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Nucleotides {
    fn from(bytes: &[u8; N]) -> Self {
        Nucleotides(bytes.to_vec())
    }
}

/// Checked construction from text: the encoding is validated so that the
/// translation functions only ever see ASCII bytes.
impl std::str::FromStr for Nucleotides {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.bytes().find(|b| !b.is_ascii()) {
            Some(b) => Err(EncodingError::NonAscii(b)),
            None => Ok(Nucleotides(s.as_bytes().to_vec())),
        }
    }
}

impl IntoIterator for Nucleotides {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Nucleotides {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<u8> for Nucleotides {
    fn from_iter<T: IntoIterator<Item = u8>>(iterable: T) -> Self {
        Nucleotides(iterable.into_iter().collect())
    }
}

// Indexing
impl std::ops::Index<usize> for Nucleotides {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::ops::Index<std::ops::Range<usize>> for Nucleotides {
    type Output = [u8];

    fn index(&self, index: std::ops::Range<usize>) -> &[u8] {
        &self.0[index]
    }
}

// Display
impl std::fmt::Display for Nucleotides {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl std::fmt::Debug for Nucleotides {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
