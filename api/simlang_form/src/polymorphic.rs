// Copyright 2015-2024 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{Object, ReadError};

/// A trait object type that can hold any of a fixed set of registered types. Implemented for
/// `dyn Trait` by the [`polymorphic!`](crate::polymorphic) macro, which also implements
/// [`crate::Form`] for `Box<dyn Trait>`.
pub trait Polymorphic {
    /// Name of the slot type, for error reporting.
    fn slot_name() -> &'static str;

    /// Convert a constructed instance into the slot type.
    fn from_object(object: Box<dyn Object>) -> Result<Box<Self>, ReadError>;
}

/// Allow `Box<dyn Trait>` to be used as a polymorphic slot for the listed types. The trait must
/// have [`Object`] as a supertrait and the listed types must implement it. Values in the slot are
/// written with a type tag and read back by resolving that tag in the serializer's registry, so
/// each listed type must also be registered with [`crate::Serializer::register`].
///
/// ```
/// use simlang_form::{deep_equals, polymorphic, record, Object, Serializer};
///
/// trait Shape: Object {}
///
/// #[derive(Debug, Default)]
/// struct Circle {
///     radius: f64,
/// }
///
/// #[derive(Debug, Default)]
/// struct Square {
///     side: f64,
/// }
///
/// record!(Circle { radius });
/// record!(Square { side });
///
/// impl Shape for Circle {}
/// impl Shape for Square {}
///
/// polymorphic!(Shape => Circle, Square);
///
/// let mut serializer = Serializer::new();
/// serializer.register::<Circle>().register::<Square>();
///
/// let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Circle { radius: 1.5 }), Box::new(Square { side: 2.0 })];
/// let value = serializer.serialize(&shapes);
/// let restored: Vec<Box<dyn Shape>> = serializer.deserialize(&value).unwrap();
/// assert!(deep_equals(&shapes, &restored));
/// ```
#[macro_export]
macro_rules! polymorphic {
    ($slot:ident => $($class:ty),+ $(,)?) => {
        impl $crate::Polymorphic for dyn $slot {
            fn slot_name() -> &'static str {
                concat!(module_path!(), "::", stringify!($slot))
            }

            fn from_object(
                object: ::std::boxed::Box<dyn $crate::Object>,
            ) -> ::std::result::Result<::std::boxed::Box<Self>, $crate::ReadError> {
                let found = $crate::Object::type_name(&*object);
                let any = $crate::Object::into_any(object);
                $(
                    let any = match any.downcast::<$class>() {
                        ::std::result::Result::Ok(instance) => {
                            return ::std::result::Result::Ok(instance as ::std::boxed::Box<Self>);
                        }
                        ::std::result::Result::Err(any) => any,
                    };
                )+
                ::std::mem::drop(any);
                ::std::result::Result::Err($crate::ReadError::NotAssignable {
                    found,
                    expected: <Self as $crate::Polymorphic>::slot_name(),
                })
            }
        }

        impl $crate::Form for ::std::boxed::Box<dyn $slot> {
            fn write_with(&self, serializer: &$crate::Serializer) -> $crate::model::Value {
                serializer.serialize_polymorphic($crate::Object::as_object(&**self))
            }

            fn read_with(
                serializer: &$crate::Serializer,
                value: &$crate::model::Value,
            ) -> ::std::result::Result<Self, $crate::ReadError> {
                serializer.deserialize_polymorphic::<dyn $slot>(value)
            }

            fn view(&self) -> $crate::View<'_> {
                $crate::View::Indirect($crate::Object::as_object(&**self))
            }
        }
    };
}
