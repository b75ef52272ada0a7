/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Layer used by `Surface` calls on a `DrawList`; paint order then follows call order.
    pub const BASE: ZIndex = ZIndex(0);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
