use super::BoundedKind;

/// Source of the bounds applied when a placeholder omits them.
///
/// The parser only reads from a resolver; loading and saving the values is
/// the caller's concern. `config::ParameterDefaults` is the persisted
/// implementation.
pub trait DefaultsResolver {
    /// Inclusive `(min, max)` for the given kind. The parser rejects a pair
    /// with `min > max` the same way it rejects explicit bounds.
    fn resolve(&self, kind: BoundedKind) -> (u64, u64);
}

impl<R: DefaultsResolver + ?Sized> DefaultsResolver for &R {
    fn resolve(&self, kind: BoundedKind) -> (u64, u64) {
        (**self).resolve(kind)
    }
}
