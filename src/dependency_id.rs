use thiserror::Error ;



/// Unique identifier of a registry entry.
///
/// Exports and components share a single namespace, so two entries registered
/// under the same `DependencyId` replace each other. The identifier is guaranteed
/// to be non-empty, which is why registering can never fail.
#[derive( Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd )]
pub struct DependencyId( String );

/// Error returned when constructing a [`DependencyId`] from an invalid string.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum InvalidId {
	/// Identifiers must contain at least one character.
	#[error( "Dependency ids must not be empty" )] Empty,
}

impl DependencyId {

	/// Creates a new identifier.
	///
	/// # Errors
	/// Returns [`InvalidId::Empty`] if `id` is an empty string.
	pub fn new( id: impl Into<String> ) -> Result<Self, InvalidId> {
		let id = id.into();
		match id.is_empty() {
			true => Err( InvalidId::Empty ),
			false => Ok( Self( id )),
		}
	}

	#[inline] pub fn as_str( &self ) -> &str { &self.0 }

}

impl std::fmt::Display for DependencyId {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
		std::fmt::Display::fmt( &self.0, f )
	}
}

impl std::str::FromStr for DependencyId {
	type Err = InvalidId ;
	fn from_str( id: &str ) -> Result<Self, Self::Err> { Self::new( id ) }
}

impl TryFrom<&str> for DependencyId {
	type Error = InvalidId ;
	fn try_from( id: &str ) -> Result<Self, Self::Error> { Self::new( id ) }
}

impl TryFrom<String> for DependencyId {
	type Error = InvalidId ;
	fn try_from( id: String ) -> Result<Self, Self::Error> { Self::new( id ) }
}

impl From<DependencyId> for String {
	fn from( id: DependencyId ) -> Self { id.0 }
}

impl AsRef<str> for DependencyId {
	fn as_ref( &self ) -> &str { &self.0 }
}

impl std::borrow::Borrow<str> for DependencyId {
	fn borrow( &self ) -> &str { &self.0 }
}

#[cfg( test )]
mod tests {

	use super::* ;

	#[test]
	fn rejects_empty_id() {
		assert_eq!( DependencyId::new( "" ), Err( InvalidId::Empty ));
		assert_eq!( "".parse::<DependencyId>(), Err( InvalidId::Empty ));
	}

	#[test]
	fn keeps_the_given_text() {
		let id = DependencyId::try_from( "wirings/echo" ).unwrap();
		assert_eq!( id.as_str(), "wirings/echo" );
		assert_eq!( id.to_string(), "wirings/echo" );
	}

}
