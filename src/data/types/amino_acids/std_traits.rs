use super::*;
use crate::data::err::EncodingError;

// Conversion
impl AsRef<[u8]> for AminoAcids {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<String> for AminoAcids {
    fn from(s: String) -> Self {
        AminoAcids(s.into_bytes())
    }
}

impl From<Vec<u8>> for AminoAcids {
    fn from(vec: Vec<u8>) -> Self {
        AminoAcids(vec)
    }
}

impl From<&[u8]> for AminoAcids {
    fn from(bytes: &[u8]) -> Self {
        AminoAcids(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for AminoAcids {
    fn from(bytes: &[u8; N]) -> Self {
        AminoAcids(bytes.to_vec())
    }
}

/// Checked construction from text: the encoding is validated up front.
impl std::str::FromStr for AminoAcids {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.bytes().find(|b| !b.is_ascii()) {
            Some(b) => Err(EncodingError::NonAscii(b)),
            None => Ok(AminoAcids(s.as_bytes().to_vec())),
        }
    }
}

impl IntoIterator for AminoAcids {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AminoAcids {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<u8> for AminoAcids {
    fn from_iter<T: IntoIterator<Item = u8>>(iterable: T) -> Self {
        AminoAcids(iterable.into_iter().collect())
    }
}

// Indexing
impl std::ops::Index<usize> for AminoAcids {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::ops::Index<std::ops::Range<usize>> for AminoAcids {
    type Output = [u8];

    fn index(&self, index: std::ops::Range<usize>) -> &[u8] {
        &self.0[index]
    }
}

// Display
impl std::fmt::Display for AminoAcids {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl std::fmt::Debug for AminoAcids {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
