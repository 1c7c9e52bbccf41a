//! Dense sets of enum values.
//!
//! An [`EnumSet`] stores one bit per raw value between the smallest and
//! largest entries of [`WireEnum::VALUES`]. Bit `i` stands for the raw value
//! `min + i`, so an enum declared over `100..=103` needs four bits.
//!
//! # Example
//!
//! ```
//! use wireview::scalar::{EnumSet, LittleEndian, WireEnum};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
//! struct Port(u8);
//!
//! impl WireEnum for Port {
//!     type Repr = u8;
//!     type Order = LittleEndian;
//!     const VALUES: &'static [Self] = &[Port(2), Port(3), Port(5)];
//!
//!     fn from_raw(raw: u8) -> Self {
//!         Port(raw)
//!     }
//!
//!     fn to_raw(self) -> u8 {
//!         self.0
//!     }
//! }
//!
//! let mut open: EnumSet<Port> = [Port(5), Port(2)].into_iter().collect();
//! assert!(open.contains(Port(2)));
//! assert!(!open.contains(Port(3)));
//! assert_eq!(open.iter().collect::<Vec<_>>(), vec![Port(2), Port(5)]);
//! assert_eq!(open.to_bits(), Some(0b10_0100));
//!
//! open.remove(Port(2));
//! assert_eq!(open.len(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::enumeration::WireEnum;
use super::primitive::Scalar;

const WORD_BITS: usize = u64::BITS as usize;

/// An integer scalar that can key an [`EnumSet`].
pub trait EnumRepr: Scalar + Ord {
    fn to_i128(self) -> i128;

    /// Truncating conversion. Only called with values inside an
    /// [`EnumBound`], which always fit.
    fn from_i128(value: i128) -> Self;
}

macro_rules! impl_enum_repr {
    ($($ty:ty),*) => {
        $(
            impl EnumRepr for $ty {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_enum_repr!(u8, i8, u16, i16, u32, i32, u64, i64);

/// The raw value range spanned by an enum's `VALUES`.
///
/// Maps a value to its bit index (`raw - min`) and back.
pub struct EnumBound<E> {
    min: i128,
    end: usize,
    _marker: PhantomData<fn() -> E>,
}

impl<E> Clone for EnumBound<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumBound<E> {}

impl<E> fmt::Debug for EnumBound<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumBound")
            .field("min", &self.min)
            .field("end", &self.end)
            .finish()
    }
}

impl<E> PartialEq for EnumBound<E> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.end == other.end
    }
}

impl<E> Eq for EnumBound<E> {}

impl<E: WireEnum> EnumBound<E>
where
    E::Repr: EnumRepr,
{
    /// Compute the bound from `E::VALUES`. Empty when `VALUES` is.
    pub fn new() -> Self {
        let mut raws = E::VALUES.iter().map(|v| v.to_raw().to_i128());
        let (min, max) = match raws.next() {
            Some(first) => raws.fold((first, first), |(lo, hi), raw| (lo.min(raw), hi.max(raw))),
            None => {
                return Self {
                    min: 0,
                    end: 0,
                    _marker: PhantomData,
                }
            }
        };
        Self {
            min,
            end: usize::try_from(max - min + 1).unwrap_or(usize::MAX),
            _marker: PhantomData,
        }
    }

    /// Smallest declared raw value.
    pub fn min(&self) -> E::Repr {
        E::Repr::from_i128(self.min)
    }

    /// Largest declared raw value. Equals [`min`](Self::min) when empty.
    pub fn max(&self) -> E::Repr {
        E::Repr::from_i128(self.min + (self.end.max(1) as i128 - 1))
    }

    /// Number of raw values in `min..=max`.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Bit index of `value`, or `None` outside the bound.
    pub fn encode(&self, value: E) -> Option<usize> {
        let offset = value.to_raw().to_i128() - self.min;
        usize::try_from(offset).ok().filter(|&index| index < self.end)
    }

    /// Value at bit `index`. `index` must be below [`end`](Self::end).
    pub fn decode(&self, index: usize) -> E {
        debug_assert!(index < self.end);
        E::from_raw(E::Repr::from_i128(self.min + index as i128))
    }
}

impl<E: WireEnum> Default for EnumBound<E>
where
    E::Repr: EnumRepr,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A set of `E` values backed by a bitset over [`EnumBound`].
///
/// Words are allocated up to the highest member only, and trailing empty
/// words are dropped, so equal sets compare equal.
pub struct EnumSet<E: WireEnum> {
    bound: EnumBound<E>,
    words: Vec<u64>,
}

impl<E: WireEnum> EnumSet<E>
where
    E::Repr: EnumRepr,
{
    /// An empty set.
    pub fn new() -> Self {
        Self {
            bound: EnumBound::new(),
            words: Vec::new(),
        }
    }

    /// The bound this set is keyed by.
    pub fn bound(&self) -> EnumBound<E> {
        self.bound
    }

    /// Add `value`. Returns `false` if it was already present.
    ///
    /// # Panics
    ///
    /// Panics if `value` lies outside the declared range, which only
    /// happens for values obtained through `render` or `from_raw`.
    pub fn insert(&mut self, value: E) -> bool {
        let Some(index) = self.bound.encode(value) else {
            panic!("{value:?} is outside the declared range of its enum");
        };
        let (word, bit) = (index / WORD_BITS, index % WORD_BITS);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let was_set = self.words[word] & (1u64 << bit) != 0;
        self.words[word] |= 1u64 << bit;
        !was_set
    }

    /// Remove `value`. Returns `false` if it was absent.
    pub fn remove(&mut self, value: E) -> bool {
        let Some(index) = self.bound.encode(value) else {
            return false;
        };
        let (word, bit) = (index / WORD_BITS, index % WORD_BITS);
        let Some(slot) = self.words.get_mut(word) else {
            return false;
        };
        let was_set = *slot & (1u64 << bit) != 0;
        *slot &= !(1u64 << bit);
        self.trim();
        was_set
    }

    pub fn contains(&self, value: E) -> bool {
        self.bound.encode(value).map_or(false, |index| {
            self.words
                .get(index / WORD_BITS)
                .map_or(false, |&word| word & (1u64 << (index % WORD_BITS)) != 0)
        })
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct values the set can hold.
    pub fn max_len(&self) -> usize {
        self.bound.end()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Members in ascending raw order.
    pub fn iter(&self) -> impl Iterator<Item = E> + '_ {
        let bound = self.bound;
        self.words.iter().enumerate().flat_map(move |(w, &word)| {
            (0..WORD_BITS)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| bound.decode(w * WORD_BITS + bit))
        })
    }

    /// The set as a mask with bit `raw` set for each member.
    ///
    /// `None` unless every declared raw value lies in `0..64`.
    pub fn to_bits(&self) -> Option<u64> {
        let shift = self.mask_shift()?;
        Some(self.words.first().copied().unwrap_or(0) << shift)
    }

    /// Inverse of [`to_bits`](Self::to_bits). Bits outside the declared
    /// range are ignored.
    ///
    /// `None` unless every declared raw value lies in `0..64`.
    pub fn from_bits(bits: u64) -> Option<Self> {
        let mut set = Self::new();
        let shift = set.mask_shift()?;
        let span = set.bound.end();
        let mut word = bits >> shift;
        if span < WORD_BITS {
            word &= (1u64 << span) - 1;
        }
        if word != 0 {
            set.words.push(word);
        }
        Some(set)
    }

    fn mask_shift(&self) -> Option<u32> {
        let min = self.bound.min;
        let last = min + self.bound.end() as i128 - 1;
        if min >= 0 && last < WORD_BITS as i128 {
            u32::try_from(min).ok()
        } else {
            None
        }
    }

    fn trim(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }
}

impl<E: WireEnum> Default for EnumSet<E>
where
    E::Repr: EnumRepr,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E: WireEnum> Clone for EnumSet<E> {
    fn clone(&self) -> Self {
        Self {
            bound: self.bound,
            words: self.words.clone(),
        }
    }
}

impl<E: WireEnum> PartialEq for EnumSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl<E: WireEnum> Eq for EnumSet<E> {}

impl<E: WireEnum> fmt::Debug for EnumSet<E>
where
    E::Repr: EnumRepr,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E: WireEnum> Extend<E> for EnumSet<E>
where
    E::Repr: EnumRepr,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<E: WireEnum> FromIterator<E> for EnumSet<E>
where
    E::Repr: EnumRepr,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
