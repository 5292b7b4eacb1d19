use std::any::Any ;
use std::sync::Arc ;



/// An opaque value registered as a non-component dependency.
///
/// Typically a stand-in for a third-party library handle. `Export` is a handle type:
/// cloning it shares the same underlying value, so a dependency requested several
/// times resolves to the same value every time.
#[derive( Clone )]
pub struct Export( Arc<dyn Any + Send + Sync> );

impl Export {

	/// Wraps `value` into a new export.
	pub fn new<T: Any + Send + Sync>( value: T ) -> Self {
		Self( Arc::new( value ))
	}

	/// Wraps an already shared value without reallocating it.
	pub fn from_arc( value: Arc<dyn Any + Send + Sync> ) -> Self { Self( value )}

	/// Returns the value if it is of type `T`.
	#[inline] pub fn downcast_ref<T: Any>( &self ) -> Option<&T> { self.0.downcast_ref::<T>() }

	/// Returns `true` if the value is of type `T`.
	#[inline] pub fn is<T: Any>( &self ) -> bool { self.0.is::<T>() }

	/// Returns `true` if both handles point to the same value.
	#[inline] pub fn same_as( &self, other: &Self ) -> bool { Arc::ptr_eq( &self.0, &other.0 ) }

}

impl std::fmt::Debug for Export {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_tuple( "Export" ).field( &"<opaque>" ).finish()
	}
}

#[cfg( test )]
mod tests {

	use super::* ;

	#[test]
	fn clones_share_the_value() {
		let export = Export::new( 42_u32 );
		let clone = export.clone();
		assert!( export.same_as( &clone ));
		assert!( !export.same_as( &Export::new( 42_u32 )));
		assert_eq!( clone.downcast_ref::<u32>(), Some( &42 ));
		assert!( clone.downcast_ref::<i64>().is_none() );
	}

}
