//! Fake components.
//!
//! A fake offers every method and event a real component would but does nothing.
//! It also never pulls in further dependencies: anything wired into a fake has its
//! dependency list emptied first, severing the fake from the real dependency graph.

use std::sync::Arc ;
use pipe_trait::Pipe ;
use serde_json::Value ;

use crate::{ Blueprint, Component, DependencyId, Wiring };



/// Descriptor given to every event of a fake component.
pub const FAKE_EVENT_DESCRIPTOR: &str = "Mock event from fake_component()" ;

/// Declares the shape of a fake component.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct ComponentDefinition {
	/// Registry key of the fake. Also used in its display name.
	id: DependencyId,
	/// Methods the fake exposes, each a no-op.
	methods: Vec<String>,
	/// Events the fake exposes.
	events: Vec<String>,
}

impl ComponentDefinition {

	pub fn new( id: DependencyId ) -> Self {
		Self { id, methods: Vec::with_capacity( 0 ), events: Vec::with_capacity( 0 ) }
	}

	pub fn with_methods( mut self, methods: impl IntoIterator<Item = impl Into<String>> ) -> Self {
		self.methods = methods.into_iter().map( Into::into ).collect();
		self
	}

	pub fn with_events( mut self, events: impl IntoIterator<Item = impl Into<String>> ) -> Self {
		self.events = events.into_iter().map( Into::into ).collect();
		self
	}

	#[inline] pub fn id( &self ) -> &DependencyId { &self.id }
	#[inline] pub fn methods( &self ) -> &[String] { &self.methods }
	#[inline] pub fn events( &self ) -> &[String] { &self.events }

}

/// Builds a fake component from its definition.
///
/// ```
/// # use wire_harness::{ ComponentDefinition, DependencyId, fake_component };
/// let widget = fake_component( &ComponentDefinition::new( DependencyId::new( "widget" ).unwrap() )
/// 	.with_methods([ "render" ])
/// 	.with_events([ "clicked" ])
/// );
/// assert_eq!( widget.name(), "Mock of widget" );
/// assert_eq!( widget.call( "render", &[] ), Ok( serde_json::Value::Null ));
/// assert!( widget.has_event( "clicked" ));
/// ```
pub fn fake_component( definition: &ComponentDefinition ) -> Component {
	Blueprint::new( format!( "Mock of {}", definition.id ))
		.pipe(| blueprint | definition.methods.iter().fold( blueprint, | blueprint, method |
			blueprint.with_method( method.as_str(), | _, _ | Value::Null )
		))
		.pipe(| blueprint | definition.events.iter().fold( blueprint, | blueprint, event |
			blueprint.with_event( event.as_str(), FAKE_EVENT_DESCRIPTOR )
		))
		.with_init( sever_dependencies )
		.pipe( Component::new )
}

fn sever_dependencies( component: &Component ) {
	component.replace_wire_in(| inherited | Arc::new( move | component: &Component, mut wiring: Wiring | {
		wiring.clear_depends();
		inherited( component, wiring )
	}));
}

#[cfg( test )]
mod tests {

	use super::* ;

	fn definition() -> ComponentDefinition {
		ComponentDefinition::new( DependencyId::new( "carousel" ).unwrap() )
			.with_methods([ "next", "previous" ])
			.with_events([ "slid" ])
	}

	#[test]
	fn exposes_declared_methods_and_events() {
		let fake = fake_component( &definition() );
		assert_eq!( fake.methods(), vec![ "next".to_string(), "previous".to_string() ]);
		assert_eq!( fake.events().len(), 1 );
		assert_eq!( fake.event( "slid" ).as_deref(), Some( FAKE_EVENT_DESCRIPTOR ));
		assert!( fake.depends().is_empty() );
	}

	#[test]
	fn wiring_into_a_fake_drops_its_dependencies() {
		let fake = fake_component( &definition() );
		fake.wire_in( Wiring::new()
			.with_depends([ "jquery", "underscore" ])
			.with_method( "extra", | _, _ | Value::Bool( true ))
		).unwrap();
		assert!( fake.depends().is_empty() );
		assert_eq!( fake.call( "extra", &[] ), Ok( Value::Bool( true )));
	}

}
