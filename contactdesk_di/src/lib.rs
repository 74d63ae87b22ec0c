//! Compile-time dependency wiring.
//!
//! A provider owns the leaf dependencies (configuration, database handles)
//! and caches every value built from them, so each service type is
//! constructed at most once per provider.

extern crate self as contactdesk_di;

pub use contactdesk_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// The cache holding every value built by this provider so far.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}
