use std::marker::PhantomData;
use thiserror::Error;

/// Represents a strongly-typed, `String`-named reference to a "resource"
/// (`TResource`) stored within some other data-store (`TSource`) without
/// holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// As a concrete example, a [`NamedTypeAnnotation`](crate::types::NamedTypeAnnotation)
/// stores a `NamedRef<Schema, InputType>` rather than the
/// [`InputType`](crate::types::InputType) itself. This is what allows an
/// input object to declare a field whose type is (directly or indirectly)
/// the input object itself.
pub struct NamedRef<
    TSource,
    TResource: DerefByName<Source=TSource>,
> {
    name: String,
    phantom: PhantomData<fn(&TSource) -> TResource>,
}
impl<TSource, TResource: DerefByName<Source=TSource>> NamedRef<TSource, TResource> {
    pub fn new(name: impl AsRef<str>) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> Clone
    for NamedRef<TSource, TResource> {
    fn clone(&self) -> Self {
        Self::new(self.name.as_str())
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> core::fmt::Debug
    for NamedRef<TSource, TResource> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NamedRef")
            .field("name", &self.name)
            .finish()
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> PartialEq
    for NamedRef<TSource, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of NamedRef<T> for that type.
pub trait DerefByName: core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str) -> NamedRef<Self::Source, Self> where Self: Sized {
        NamedRef::<Self::Source, Self>::new(name)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DerefByNameError {
    #[error("No definition exists for the name `{0}`")]
    DanglingReference(String),
}
