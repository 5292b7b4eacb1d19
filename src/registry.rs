//! Caller-owned registry of dependencies.
//!
//! A [`Registry`] maps [`DependencyId`]s to [`Entry`]s. Exports and components share
//! one flat namespace: an id refers to at most one entry at a time, and registering
//! an id again silently replaces whatever was there.

use std::collections::HashMap ;
use tracing::debug ;

use crate::{ Component, ComponentDefinition, DependencyId, Export, fake_component };



/// A value stored in the [`Registry`], and what a load resolves to.
#[derive( Clone, Debug )]
pub enum Entry {
	/// A non-component dependency supplied verbatim.
	Export( Export ),
	/// A component, usually a fake.
	Component( Component ),
}

impl Entry {

	/// Returns the export if this is an export entry.
	#[inline] pub fn as_export( &self ) -> Option<&Export> { match self {
		Self::Export( export ) => Some( export ),
		Self::Component( _ ) => None,
	}}

	/// Returns the component if this is a component entry.
	#[inline] pub fn as_component( &self ) -> Option<&Component> { match self {
		Self::Component( component ) => Some( component ),
		Self::Export( _ ) => None,
	}}

	/// Returns `true` if both entries refer to the same value.
	pub fn same_as( &self, other: &Self ) -> bool { match ( self, other ) {
		( Self::Export( a ), Self::Export( b )) => a.same_as( b ),
		( Self::Component( a ), Self::Component( b )) => a.same_as( b ),
		_ => false,
	}}

}

impl From<Export> for Entry {
	fn from( export: Export ) -> Self { Self::Export( export ) }
}

impl From<Component> for Entry {
	fn from( component: Component ) -> Self { Self::Component( component ) }
}

/// Mapping from identifiers to registered dependencies.
///
/// Registration never fails. Entries live until they are overwritten or the
/// registry is [`reset`]( Self::reset ).
#[derive( Debug, Default, Clone )]
pub struct Registry {
	entries: HashMap<DependencyId, Entry>,
}

impl Registry {

	pub fn new() -> Self { Self::default() }

	/// Removes every entry.
	///
	/// Values resolved before the reset remain usable but can no longer be loaded.
	pub fn reset( &mut self ) {
		debug!( count = self.entries.len(), "resetting registry" );
		self.entries.clear();
	}

	/// Registers `entry` under `id`, replacing any previous entry.
	pub fn insert( &mut self, id: DependencyId, entry: impl Into<Entry> ) {
		let entry = entry.into();
		let kind = match entry {
			Entry::Export( _ ) => "export",
			Entry::Component( _ ) => "component",
		};
		debug!( %id, kind, "registering dependency" );
		self.entries.insert( id, entry );
	}

	/// Registers an external, non-component dependency.
	pub fn define_export( &mut self, id: DependencyId, value: Export ) {
		self.insert( id, value );
	}

	/// Builds a fake component from `definition` and registers it under the definition's id.
	pub fn define_component( &mut self, definition: &ComponentDefinition ) {
		self.insert( definition.id().clone(), fake_component( definition ));
	}

	/// Registers the component produced by `factory`.
	pub fn pack( &mut self, id: DependencyId, factory: impl FnOnce() -> Component ) {
		self.insert( id, factory() );
	}

	#[inline] pub fn get( &self, id: &str ) -> Option<&Entry> { self.entries.get( id ) }

	#[inline] pub fn contains( &self, id: &str ) -> bool { self.entries.contains_key( id ) }

	#[inline] pub fn len( &self ) -> usize { self.entries.len() }

	#[inline] pub fn is_empty( &self ) -> bool { self.entries.is_empty() }

}

#[cfg( test )]
mod tests {

	use crate::{ Blueprint, Component };
	use super::* ;

	fn id( id: &str ) -> DependencyId { DependencyId::new( id ).unwrap() }

	#[test]
	fn later_registration_replaces_earlier() {
		let mut registry = Registry::new();
		registry.define_export( id( "lib" ), Export::new( "first" ));
		registry.define_component( &ComponentDefinition::new( id( "lib" )));
		assert_eq!( registry.len(), 1 );
		assert!( registry.get( "lib" ).and_then( Entry::as_component ).is_some() );
	}

	#[test]
	fn components_are_keyed_by_their_definition_id() {
		let mut registry = Registry::new();
		registry.define_component( &ComponentDefinition::new( id( "widget" )).with_methods([ "render" ]));
		registry.define_component( &ComponentDefinition::new( id( "gadget" )));
		assert!( registry.contains( "widget" ));
		assert!( registry.contains( "gadget" ));
		assert_eq!( registry.len(), 2 );
	}

	#[test]
	fn reset_clears_both_kinds() {
		let mut registry = Registry::new();
		registry.define_export( id( "jquery" ), Export::new(()));
		registry.pack( id( "packed" ), || Component::new( Blueprint::new( "packed" )));
		registry.reset();
		assert!( registry.is_empty() );
		assert!( registry.get( "jquery" ).is_none() );
	}

}
