/// Declares a provider struct holding the given leaf dependencies.
///
/// Every listed field type can then be built from the provider by cloning
/// the stored value.
#[macro_export]
macro_rules! provider {
    ($(#[doc=$doc:literal])* $vis:vis $ident:ident {
        $( $field:ident: $ty:ty, )*
    }) => {
        $(#[doc=$doc])*
        $vis struct $ident {
            _cache: $crate::TypeMap,
            $( $field: $ty, )*
        }

        impl $crate::Provider for $ident {
            fn cache(&mut self) -> &mut $crate::TypeMap {
                &mut self._cache
            }
        }

        $(
            impl $crate::Build<$ident> for $ty {
                fn build(provider: &mut $ident) -> Self {
                    ::core::clone::Clone::clone(&provider.$field)
                }
            }
        )*
    };
}
