use std::collections::HashMap ;
use std::sync::Arc ;
use serde_json::Value ;

use crate::{ Component, ComponentError, Method };



/// Hook run by the default wire-in strategy once a [`Wiring`] has been absorbed.
pub type WiringInit = Arc<dyn Fn( &Component ) -> Result<(), ComponentError> + Send + Sync> ;

/// Reusable behaviour that can be wired into any [`Component`].
///
/// A wiring brings its own methods, the ids it depends on and an optional init
/// hook. See [`Component::wire_in`] for how it is absorbed.
#[derive( Clone, Default )]
#[must_use = "pass the wiring to Component::wire_in"]
pub struct Wiring {
	depends: Vec<String>,
	methods: HashMap<String, Method>,
	init: Option<WiringInit>,
}

impl Wiring {

	pub fn new() -> Self { Self::default() }

	/// Declares the ids this wiring needs resolved.
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

	/// Sets the hook run after the wiring was absorbed. `component` is the host.
	pub fn with_init(
		mut self,
		init: impl Fn( &Component ) -> Result<(), ComponentError> + Send + Sync + 'static,
	) -> Self {
		self.init = Some( Arc::new( init ));
		self
	}

	#[inline] pub fn depends( &self ) -> &[String] { &self.depends }

	/// Drops every declared dependency.
	#[inline] pub fn clear_depends( &mut self ) { self.depends.clear(); }

	#[inline] pub fn has_method( &self, name: &str ) -> bool { self.methods.contains_key( name ) }

	pub(crate) fn into_parts( self ) -> ( Vec<String>, HashMap<String, Method>, Option<WiringInit> ) {
		( self.depends, self.methods, self.init )
	}

}

impl std::fmt::Debug for Wiring {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Wiring" )
			.field( "depends", &self.depends )
			.field( "methods", &self.methods.keys().collect::<Vec<_>>() )
			.field( "init", &self.init.as_ref().map(| _ | "<closure>" ))
			.finish()
	}
}
