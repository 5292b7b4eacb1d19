//! Component model types.
//!
//! A [`Component`] exposes named methods and events and declares the dependencies it
//! needs (`depends`). Reusable behaviour is mixed into a component by wiring a
//! [`Wiring`]( crate::Wiring ) into it. How a wiring is absorbed is itself replaceable,
//! which is what lets a fake component refuse to pull in real dependencies.

use std::collections::HashMap ;
use std::sync::{ Arc, Mutex, MutexGuard, PoisonError };
use itertools::Itertools ;
use serde_json::Value ;
use thiserror::Error ;

use crate::Wiring ;



/// A callable exposed by a component.
///
/// Receives the component it was invoked on and the call arguments.
pub type Method = Arc<dyn Fn( &Component, &[Value] ) -> Value + Send + Sync> ;

/// Hook run once when a component is built from its [`Blueprint`].
pub type InitHook = Arc<dyn Fn( &Component ) + Send + Sync> ;

/// Strategy used by [`Component::wire_in`] to absorb a [`Wiring`].
pub type WireIn = Arc<dyn Fn( &Component, Wiring ) -> Result<(), ComponentError> + Send + Sync> ;

/// Errors that can occur when interacting with a [`Component`].
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum ComponentError {
	/// The component exposes no method with this name.
	#[error( "Unknown Method: {0}" )] UnknownMethod( String ),
}

/// Everything needed to build a [`Component`].
#[must_use = "pass the blueprint to Component::new"]
pub struct Blueprint {
	name: String,
	depends: Vec<String>,
	methods: HashMap<String, Method>,
	events: HashMap<String, String>,
	init: Option<InitHook>,
}

impl Blueprint {

	pub fn new( name: impl Into<String> ) -> Self {
		Self {
			name: name.into(),
			depends: Vec::with_capacity( 0 ),
			methods: HashMap::with_capacity( 0 ),
			events: HashMap::with_capacity( 0 ),
			init: None,
		}
	}

	/// Declares the ids this component needs the loader to resolve.
	pub fn with_depends( mut self, depends: impl IntoIterator<Item = impl Into<String>> ) -> Self {
		self.depends = depends.into_iter().map( Into::into ).collect();
		self
	}

	pub fn with_method(
		mut self,
		name: impl Into<String>,
		method: impl Fn( &Component, &[Value] ) -> Value + Send + Sync + 'static,
	) -> Self {
		self.methods.insert( name.into(), Arc::new( method ));
		self
	}

	/// Adds an event with a human readable descriptor.
	pub fn with_event( mut self, name: impl Into<String>, descriptor: impl Into<String> ) -> Self {
		self.events.insert( name.into(), descriptor.into() );
		self
	}

	/// Sets the hook run once the component has been built.
	pub fn with_init( mut self, init: impl Fn( &Component ) + Send + Sync + 'static ) -> Self {
		self.init = Some( Arc::new( init ));
		self
	}

}

impl std::fmt::Debug for Blueprint {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Blueprint" )
			.field( "name", &self.name )
			.field( "depends", &self.depends )
			.field( "methods", &self.methods.keys().sorted().collect::<Vec<_>>() )
			.field( "events", &self.events )
			.field( "init", &self.init.as_ref().map(| _ | "<closure>" ))
			.finish()
	}
}

struct State {
	name: String,
	depends: Vec<String>,
	methods: HashMap<String, Method>,
	events: HashMap<String, String>,
	wire_in: WireIn,
}

/// A built component.
///
/// `Component` is a handle type: cloning it creates another reference to the same
/// component rather than duplicating it. Use [`same_as`]( Self::same_as ) to check
/// whether two handles refer to the same component.
#[derive( Clone )]
pub struct Component( Arc<Mutex<State>> );

impl Component {

	/// Builds a component and runs the blueprint's init hook on it.
	pub fn new( blueprint: Blueprint ) -> Self {
		let Blueprint { name, depends, methods, events, init } = blueprint ;
		let component = Self( Arc::new( Mutex::new( State {
			name,
			depends,
			methods,
			events,
			wire_in: Arc::new( absorb_wiring ),
		})));
		if let Some( init ) = init { init( &component ); }
		component
	}

	// Callbacks never run while the lock is held, so a poisoned lock still guards consistent state.
	fn state( &self ) -> MutexGuard<'_, State> {
		self.0.lock().unwrap_or_else( PoisonError::into_inner )
	}

	#[inline] pub fn name( &self ) -> String { self.state().name.clone() }

	/// Ids this component needs resolved before it can run.
	#[inline] pub fn depends( &self ) -> Vec<String> { self.state().depends.clone() }

	/// Method names, sorted.
	pub fn methods( &self ) -> Vec<String> {
		self.state().methods.keys().sorted().cloned().collect()
	}

	#[inline] pub fn has_method( &self, name: &str ) -> bool { self.state().methods.contains_key( name ) }

	/// Event names mapped to their descriptors.
	#[inline] pub fn events( &self ) -> HashMap<String, String> { self.state().events.clone() }

	#[inline] pub fn event( &self, name: &str ) -> Option<String> { self.state().events.get( name ).cloned() }

	#[inline] pub fn has_event( &self, name: &str ) -> bool { self.state().events.contains_key( name ) }

	/// Calls a method by name.
	///
	/// # Errors
	/// Returns [`ComponentError::UnknownMethod`] if no such method exists.
	pub fn call( &self, method: &str, args: &[Value] ) -> Result<Value, ComponentError> {
		let callable = self.state().methods.get( method ).cloned()
			.ok_or_else(|| ComponentError::UnknownMethod( method.to_string() ))?;
		Ok( callable( self, args ))
	}

	/// Mixes `wiring` into this component using the current wire-in strategy.
	///
	/// The default strategy appends the wiring's dependencies to this component's,
	/// adds its methods and then runs its init hook.
	///
	/// # Errors
	/// Propagates errors returned by the wiring's init hook.
	pub fn wire_in( &self, wiring: Wiring ) -> Result<(), ComponentError> {
		let wire_in = Arc::clone( &self.state().wire_in );
		wire_in( self, wiring )
	}

	/// Replaces the wire-in strategy with one derived from the inherited strategy.
	///
	/// ```
	/// # use std::sync::Arc ;
	/// # use wire_harness::{ Blueprint, Component, Wiring };
	/// let component = Component::new( Blueprint::new( "logged" ));
	/// component.replace_wire_in(| inherited | Arc::new( move | component: &Component, wiring: Wiring | {
	/// 	println!( "wiring {} dependencies", wiring.depends().len() );
	/// 	inherited( component, wiring )
	/// }));
	/// component.wire_in( Wiring::new().with_depends([ "jquery" ])).unwrap();
	/// assert_eq!( component.depends(), vec![ "jquery".to_string() ]);
	/// ```
	pub fn replace_wire_in( &self, wrap: impl FnOnce( WireIn ) -> WireIn ) {
		let inherited = Arc::clone( &self.state().wire_in );
		let replacement = wrap( inherited );
		self.state().wire_in = replacement ;
	}

	/// Returns `true` if both handles refer to the same component.
	#[inline] pub fn same_as( &self, other: &Self ) -> bool { Arc::ptr_eq( &self.0, &other.0 ) }

}

fn absorb_wiring( component: &Component, wiring: Wiring ) -> Result<(), ComponentError> {
	let ( depends, methods, init ) = wiring.into_parts();
	{
		let mut state = component.state();
		state.depends.extend( depends );
		state.methods.extend( methods );
	}
	match init {
		Some( init ) => init( component ),
		None => Ok(()),
	}
}

impl std::fmt::Debug for Component {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		let state = self.state();
		f.debug_struct( "Component" )
			.field( "name", &state.name )
			.field( "depends", &state.depends )
			.field( "methods", &state.methods.keys().sorted().collect::<Vec<_>>() )
			.field( "events", &state.events )
			.finish_non_exhaustive()
	}
}

#[cfg( test )]
mod tests {

	use serde_json::json ;
	use super::* ;

	#[test]
	fn init_hook_runs_on_build() {
		let component = Component::new( Blueprint::new( "counter" )
			.with_event( "ready", "fired once" )
			.with_init(| component | { component.replace_wire_in(| inherited | inherited ); })
		);
		assert_eq!( component.name(), "counter" );
		assert_eq!( component.event( "ready" ).as_deref(), Some( "fired once" ));
	}

	#[test]
	fn methods_receive_their_component() {
		let component = Component::new( Blueprint::new( "greeter" )
			.with_method( "greet", | component, args | json!( format!( "{} greets {}", component.name(), args[0] )))
		);
		assert_eq!( component.call( "greet", &[ json!( 1 ) ]), Ok( json!( "greeter greets 1" )));
		assert_eq!(
			component.call( "missing", &[] ),
			Err( ComponentError::UnknownMethod( "missing".to_string() )),
		);
	}

	#[test]
	fn default_wire_in_keeps_dependencies() {
		let component = Component::new( Blueprint::new( "host" ).with_depends([ "underscore" ]));
		component.wire_in( Wiring::new()
			.with_depends([ "jquery" ])
			.with_method( "noop", | _, _ | Value::Null )
		).unwrap();
		assert_eq!( component.depends(), vec![ "underscore".to_string(), "jquery".to_string() ]);
		assert!( component.has_method( "noop" ));
	}

	#[test]
	fn clones_are_the_same_component() {
		let component = Component::new( Blueprint::new( "shared" ));
		let clone = component.clone();
		assert!( component.same_as( &clone ));
		clone.wire_in( Wiring::new().with_method( "added", | _, _ | Value::Null )).unwrap();
		assert!( component.has_method( "added" ));
		assert!( !component.same_as( &Component::new( Blueprint::new( "shared" ))));
	}

	#[test]
	fn replacing_wire_in_may_inspect_the_component() {
		let component = Component::new( Blueprint::new( "inspected" ));
		let inner = component.clone();
		component.replace_wire_in( move | inherited | Arc::new( move | component: &Component, wiring: Wiring | {
			assert_eq!( inner.name(), "inspected" );
			inherited( component, wiring )
		}));
		let inner = component.clone();
		component.replace_wire_in(| inherited | { assert!( !inner.has_method( "late" )); inherited });
		component.wire_in( Wiring::new().with_method( "late", | _, _ | Value::Null )).unwrap();
		assert!( component.has_method( "late" ));
	}

}
