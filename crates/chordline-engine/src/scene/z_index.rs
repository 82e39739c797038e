/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Background fills.
    pub const BACKGROUND: ZIndex = ZIndex(-10);
    /// Scene geometry.
    pub const GEOMETRY: ZIndex = ZIndex(0);
    /// Axes and status text.
    pub const OVERLAY: ZIndex = ZIndex(10);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
