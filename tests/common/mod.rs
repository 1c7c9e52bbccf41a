//! Hand-written wire types shaped like schema compiler output.
//!
//! ```text
//! Vec2      = { x: li32, y: li32 }
//! Str       = { len: lu32, data: Seq(u8, len) }
//! ThingKind = enum u8 { NAMED = 0, AT = 1, NOTHING = 2 }
//! Thing     = union(ThingKind) { NAMED: Str, AT: Vec2, NOTHING: () }
//! Path      = {
//!     corners: Vec2[2],
//!     point_count: u8,  points: Seq(Vec2, point_count),
//!     thing_count: lu16, things: Seq(Thing, thing_count),
//! }
//! ```

#![allow(dead_code)]

use wireview::scalar::{
    EnumView, Enumeration, I32Le, LittleEndian, ScalarView, U16Le, U32Le, WireEnum, U8,
};
use wireview::seq::{ArrayType, ArrayView, ListType, ListView, VectorType, VectorView};
use wireview::{ConstSized, ParseError, Result, SelfSized, WireType};

const I32: I32Le = I32Le::new();
const COUNT8: U8 = U8::new();
const COUNT16: U16Le = U16Le::new();
const LEN32: U32Le = U32Le::new();
const BYTES: VectorType<U8> = VectorType::new(U8::new());
const KIND: Enumeration<ThingKind> = Enumeration::new();

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Vec2Type;

pub struct Vec2View<'a> {
    x: ScalarView<'a, i32, LittleEndian>,
    y: ScalarView<'a, i32, LittleEndian>,
}

impl Vec2View<'_> {
    pub fn x(&self) -> i32 {
        self.x.get()
    }

    pub fn y(&self) -> i32 {
        self.y.get()
    }
}

impl WireType for Vec2Type {
    type View<'a> = Vec2View<'a>;
    type Owned = Vec2;

    fn new_view<'a>(&self) -> Vec2View<'a> {
        Vec2View {
            x: I32.new_view(),
            y: I32.new_view(),
        }
    }

    fn new_owned(&self) -> Vec2 {
        Vec2::default()
    }

    fn build(&self, dst: &mut Vec2, src: &Vec2View<'_>) {
        dst.x = src.x();
        dst.y = src.y();
    }

    fn serialize_into(&self, owned: &Vec2, buf: &mut [u8], offset: usize) -> usize {
        let offset = I32.serialize_into(&owned.x, buf, offset);
        I32.serialize_into(&owned.y, buf, offset)
    }

    fn size_bytes(&self, _owned: &Vec2) -> usize {
        self.const_size_bytes()
    }

    fn clone_owned_into(&self, dst: &mut Vec2, src: &Vec2) {
        *dst = *src;
    }
}

impl SelfSized for Vec2Type {
    fn render<'a>(&self, view: &mut Vec2View<'a>, buf: &'a [u8], offset: usize) {
        I32.render(&mut view.x, buf, offset);
        I32.render(&mut view.y, buf, offset + 4);
    }

    fn parse<'a>(&self, view: &mut Vec2View<'a>, buf: &'a [u8], offset: usize) -> Result<usize> {
        let offset = I32.parse(&mut view.x, buf, offset)?;
        I32.parse(&mut view.y, buf, offset)
    }
}

impl ConstSized for Vec2Type {
    fn const_size_bytes(&self) -> usize {
        8
    }
}

// ---------------------------------------------------------------------------
// Str
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct StrType;

pub struct StrView<'a> {
    len: ScalarView<'a, u32, LittleEndian>,
    data: VectorView<'a, U8>,
}

impl StrView<'_> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.data.iter().map(|b| b.get()).collect()
    }
}

impl WireType for StrType {
    type View<'a> = StrView<'a>;
    type Owned = Vec<u8>;

    fn new_view<'a>(&self) -> StrView<'a> {
        StrView {
            len: LEN32.new_view(),
            data: BYTES.new_view(),
        }
    }

    fn new_owned(&self) -> Vec<u8> {
        Vec::new()
    }

    fn build(&self, dst: &mut Vec<u8>, src: &StrView<'_>) {
        BYTES.build(dst, &src.data);
    }

    fn serialize_into(&self, owned: &Vec<u8>, buf: &mut [u8], offset: usize) -> usize {
        let len = u32::try_from(owned.len()).expect("string longer than u32::MAX");
        let offset = LEN32.serialize_into(&len, buf, offset);
        BYTES.serialize_into(owned, buf, offset)
    }

    fn size_bytes(&self, owned: &Vec<u8>) -> usize {
        4 + BYTES.size_bytes(owned)
    }

    fn clone_owned_into(&self, dst: &mut Vec<u8>, src: &Vec<u8>) {
        BYTES.clone_owned_into(dst, src);
    }
}

impl SelfSized for StrType {
    fn render<'a>(&self, view: &mut StrView<'a>, buf: &'a [u8], offset: usize) {
        LEN32.render(&mut view.len, buf, offset);
        BYTES.render(&mut view.data, buf, offset + 4, view.len.get() as usize);
    }

    fn parse<'a>(&self, view: &mut StrView<'a>, buf: &'a [u8], offset: usize) -> Result<usize> {
        let offset = LEN32.parse(&mut view.len, buf, offset)?;
        let count = usize::try_from(view.len.get()).map_err(|_| ParseError::Malformed)?;
        BYTES.parse(&mut view.data, buf, offset, count)
    }
}

// ---------------------------------------------------------------------------
// ThingKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThingKind(pub u8);

impl ThingKind {
    pub const NAMED: ThingKind = ThingKind(0);
    pub const AT: ThingKind = ThingKind(1);
    pub const NOTHING: ThingKind = ThingKind(2);
}

impl WireEnum for ThingKind {
    type Repr = u8;
    type Order = LittleEndian;
    const VALUES: &'static [Self] = &[ThingKind::NAMED, ThingKind::AT, ThingKind::NOTHING];

    fn from_raw(raw: u8) -> Self {
        ThingKind(raw)
    }

    fn to_raw(self) -> u8 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Thing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Thing {
    Named(Vec<u8>),
    At(Vec2),
    #[default]
    Nothing,
}

impl Thing {
    pub fn named(name: &str) -> Self {
        Thing::Named(name.as_bytes().to_vec())
    }

    pub fn kind(&self) -> ThingKind {
        match self {
            Thing::Named(_) => ThingKind::NAMED,
            Thing::At(_) => ThingKind::AT,
            Thing::Nothing => ThingKind::NOTHING,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThingType;

pub struct ThingView<'a> {
    kind: EnumView<'a, ThingKind>,
    named: StrView<'a>,
    at: Vec2View<'a>,
}

/// The active variant of a [`ThingView`].
pub enum ThingRef<'v, 'a> {
    Named(&'v StrView<'a>),
    At(&'v Vec2View<'a>),
    Nothing,
}

impl<'a> ThingView<'a> {
    pub fn kind(&self) -> ThingKind {
        self.kind.get()
    }

    /// `None` when the view was rendered over an out-of-range tag.
    pub fn variant(&self) -> Option<ThingRef<'_, 'a>> {
        match self.kind.get() {
            ThingKind::NAMED => Some(ThingRef::Named(&self.named)),
            ThingKind::AT => Some(ThingRef::At(&self.at)),
            ThingKind::NOTHING => Some(ThingRef::Nothing),
            _ => None,
        }
    }
}

impl WireType for ThingType {
    type View<'a> = ThingView<'a>;
    type Owned = Thing;

    fn new_view<'a>(&self) -> ThingView<'a> {
        ThingView {
            kind: KIND.new_view(),
            named: StrType.new_view(),
            at: Vec2Type.new_view(),
        }
    }

    fn new_owned(&self) -> Thing {
        Thing::default()
    }

    fn build(&self, dst: &mut Thing, src: &ThingView<'_>) {
        match src.variant() {
            Some(ThingRef::Named(view)) => {
                if let Thing::Named(out) = dst {
                    StrType.build(out, view);
                } else {
                    let mut out = StrType.new_owned();
                    StrType.build(&mut out, view);
                    *dst = Thing::Named(out);
                }
            }
            Some(ThingRef::At(view)) => {
                let mut at = Vec2Type.new_owned();
                Vec2Type.build(&mut at, view);
                *dst = Thing::At(at);
            }
            Some(ThingRef::Nothing) | None => *dst = Thing::Nothing,
        }
    }

    fn serialize_into(&self, owned: &Thing, buf: &mut [u8], offset: usize) -> usize {
        let offset = KIND.serialize_into(&owned.kind(), buf, offset);
        match owned {
            Thing::Named(name) => StrType.serialize_into(name, buf, offset),
            Thing::At(at) => Vec2Type.serialize_into(at, buf, offset),
            Thing::Nothing => offset,
        }
    }

    fn size_bytes(&self, owned: &Thing) -> usize {
        let payload = match owned {
            Thing::Named(name) => StrType.size_bytes(name),
            Thing::At(at) => Vec2Type.size_bytes(at),
            Thing::Nothing => 0,
        };
        KIND.const_size_bytes() + payload
    }

    fn clone_owned_into(&self, dst: &mut Thing, src: &Thing) {
        match src {
            Thing::Named(name) => {
                if let Thing::Named(out) = dst {
                    StrType.clone_owned_into(out, name);
                } else {
                    *dst = Thing::Named(name.clone());
                }
            }
            other => *dst = other.clone(),
        }
    }
}

impl SelfSized for ThingType {
    fn render<'a>(&self, view: &mut ThingView<'a>, buf: &'a [u8], offset: usize) {
        KIND.render(&mut view.kind, buf, offset);
        let offset = offset + KIND.const_size_bytes();
        match view.kind.get() {
            ThingKind::NAMED => StrType.render(&mut view.named, buf, offset),
            ThingKind::AT => Vec2Type.render(&mut view.at, buf, offset),
            _ => {}
        }
    }

    fn parse<'a>(&self, view: &mut ThingView<'a>, buf: &'a [u8], offset: usize) -> Result<usize> {
        let offset = KIND.parse(&mut view.kind, buf, offset)?;
        match view.kind.get() {
            ThingKind::NAMED => StrType.parse(&mut view.named, buf, offset),
            ThingKind::AT => Vec2Type.parse(&mut view.at, buf, offset),
            ThingKind::NOTHING => Ok(offset),
            _ => Err(ParseError::Malformed),
        }
    }
}

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub corners: Vec<Vec2>,
    pub points: Vec<Vec2>,
    pub things: Vec<Thing>,
}

#[derive(Debug, Clone, Copy)]
pub struct PathType {
    corners: ArrayType<Vec2Type, 2>,
    points: VectorType<Vec2Type>,
    things: ListType<ThingType>,
}

impl PathType {
    pub const fn new() -> Self {
        Self {
            corners: ArrayType::new(Vec2Type),
            points: VectorType::new(Vec2Type),
            things: ListType::new(ThingType),
        }
    }

    pub fn points_type(&self) -> &VectorType<Vec2Type> {
        &self.points
    }

    pub fn things_type(&self) -> &ListType<ThingType> {
        &self.things
    }
}

impl Default for PathType {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PathView<'a> {
    corners: ArrayView<'a, Vec2Type, 2>,
    point_count: ScalarView<'a, u8, LittleEndian>,
    points: VectorView<'a, Vec2Type>,
    thing_count: ScalarView<'a, u16, LittleEndian>,
    things: ListView<'a, ThingType>,
}

impl<'a> PathView<'a> {
    pub fn corners(&self) -> &ArrayView<'a, Vec2Type, 2> {
        &self.corners
    }

    pub fn points(&self) -> &VectorView<'a, Vec2Type> {
        &self.points
    }

    pub fn things(&self) -> &ListView<'a, ThingType> {
        &self.things
    }
}

impl WireType for PathType {
    type View<'a> = PathView<'a>;
    type Owned = Path;

    fn new_view<'a>(&self) -> PathView<'a> {
        PathView {
            corners: self.corners.new_view(),
            point_count: COUNT8.new_view(),
            points: self.points.new_view(),
            thing_count: COUNT16.new_view(),
            things: self.things.new_view(),
        }
    }

    fn new_owned(&self) -> Path {
        Path {
            corners: self.corners.new_owned(),
            points: self.points.new_owned(),
            things: self.things.new_owned(),
        }
    }

    fn build(&self, dst: &mut Path, src: &PathView<'_>) {
        self.corners.build(&mut dst.corners, &src.corners);
        self.points.build(&mut dst.points, &src.points);
        self.things.build(&mut dst.things, &src.things);
    }

    fn serialize_into(&self, owned: &Path, buf: &mut [u8], offset: usize) -> usize {
        let point_count = u8::try_from(owned.points.len()).expect("too many points");
        let thing_count = u16::try_from(owned.things.len()).expect("too many things");

        let offset = self.corners.serialize_into(&owned.corners, buf, offset);
        let offset = COUNT8.serialize_into(&point_count, buf, offset);
        let offset = self.points.serialize_into(&owned.points, buf, offset);
        let offset = COUNT16.serialize_into(&thing_count, buf, offset);
        self.things.serialize_into(&owned.things, buf, offset)
    }

    fn size_bytes(&self, owned: &Path) -> usize {
        self.corners.size_bytes(&owned.corners)
            + COUNT8.const_size_bytes()
            + self.points.size_bytes(&owned.points)
            + COUNT16.const_size_bytes()
            + self.things.size_bytes(&owned.things)
    }

    fn clone_owned_into(&self, dst: &mut Path, src: &Path) {
        self.corners.clone_owned_into(&mut dst.corners, &src.corners);
        self.points.clone_owned_into(&mut dst.points, &src.points);
        self.things.clone_owned_into(&mut dst.things, &src.things);
    }
}

impl SelfSized for PathType {
    fn render<'a>(&self, view: &mut PathView<'a>, buf: &'a [u8], offset: usize) {
        self.corners.render(&mut view.corners, buf, offset);
        let offset = offset + self.corners.const_size_bytes();
        COUNT8.render(&mut view.point_count, buf, offset);
        let offset = offset + COUNT8.const_size_bytes();
        let points = view.point_count.get() as usize;
        self.points.render(&mut view.points, buf, offset, points);
        let offset = offset + points * Vec2Type.const_size_bytes();
        COUNT16.render(&mut view.thing_count, buf, offset);
        let offset = offset + COUNT16.const_size_bytes();
        self.things
            .render(&mut view.things, buf, offset, view.thing_count.get() as usize);
    }

    fn parse<'a>(&self, view: &mut PathView<'a>, buf: &'a [u8], offset: usize) -> Result<usize> {
        let offset = self.corners.parse(&mut view.corners, buf, offset)?;
        let offset = COUNT8.parse(&mut view.point_count, buf, offset)?;
        let offset = self.points.parse(
            &mut view.points,
            buf,
            offset,
            view.point_count.get() as usize,
        )?;
        let offset = COUNT16.parse(&mut view.thing_count, buf, offset)?;
        self.things.parse(
            &mut view.things,
            buf,
            offset,
            view.thing_count.get() as usize,
        )
    }
}

/// A path using every shape of element.
pub fn sample_path() -> Path {
    Path {
        corners: vec![Vec2::new(-1, -1), Vec2::new(100, 200)],
        points: vec![Vec2::new(1, 2), Vec2::new(3, 4), Vec2::new(-5, 6)],
        things: vec![Thing::named("bolt"), Thing::At(Vec2::new(7, -8)), Thing::Nothing],
    }
}
