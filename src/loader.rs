//! Loader capability and its test implementation.
//!
//! Code that needs dependencies should take a [`Loader`] rather than reaching for a
//! global entry point. Production code passes its real loader; tests pass a
//! [`TestLoader`] populated with exports and fake components.

use nonempty_collections::NEVec ;

use crate::{
	Component, ComponentDefinition, Deferred, DependencyId, Entry, Export, LoadError,
	Registry, Resolver, Scheduler, TokioScheduler,
};



/// The capability set {register, resolve} shared by real and test loaders.
///
/// Object safe, so code under test can hold a `Box<dyn Loader>` chosen by its caller.
pub trait Loader {

	/// Makes `entry` loadable under `id`, replacing anything registered before.
	fn register( &mut self, id: DependencyId, entry: Entry );

	/// Resolves `ids` in order.
	///
	/// # Errors
	/// Implementations reject synchronously with [`LoadError::UnresolvedDependency`]
	/// when any id cannot be resolved.
	fn load( &self, ids: NEVec<&str> ) -> Result<Deferred, LoadError> ;

}

/// A [`Loader`] that resolves only what the test registered.
///
/// Owns its [`Registry`], so no state leaks between tests that build their own loader.
///
/// ```
/// # use wire_harness::{ ComponentDefinition, DependencyId, Loader, ManualScheduler, TestLoader, nev };
/// let scheduler = ManualScheduler::new();
/// let mut loader = TestLoader::with_scheduler( scheduler.clone() );
/// loader.define_component( &ComponentDefinition::new( DependencyId::new( "widget" ).unwrap() )
/// 	.with_methods([ "render" ])
/// 	.with_events([ "clicked" ])
/// );
///
/// let deferred = loader.load( nev![ "widget" ]).unwrap();
/// scheduler.run_pending();
/// let widget = deferred.try_resolve().unwrap().component( 0 ).cloned().unwrap();
/// assert!( widget.call( "render", &[] ).is_ok() );
/// assert!( widget.has_event( "clicked" ));
/// ```
#[derive( Debug, Clone )]
pub struct TestLoader<S = TokioScheduler> {
	registry: Registry,
	resolver: Resolver<S>,
}

impl TestLoader {

	/// Creates an empty loader completing loads on the Tokio runtime after
	/// [`TokioScheduler::DEFAULT_DELAY`].
	pub fn new() -> Self { Self::with_scheduler( TokioScheduler::default() ) }

}

impl Default for TestLoader {
	fn default() -> Self { Self::new() }
}

impl<S: Scheduler> TestLoader<S> {

	pub fn with_scheduler( scheduler: S ) -> Self {
		Self { registry: Registry::new(), resolver: Resolver::new( scheduler )}
	}

	/// Makes every registered dependency unresolvable again.
	///
	/// Useful in test teardown.
	pub fn reset( &mut self ) { self.registry.reset(); }

	/// Registers an external dependency that isn't a component, such as a stand-in
	/// for a third-party library.
	pub fn define_export( &mut self, id: DependencyId, value: Export ) {
		self.registry.define_export( id, value );
	}

	/// Registers a fake component under the definition's id.
	///
	/// The fake exposes the declared methods (as no-ops) and events and will never
	/// trigger further dependency resolution.
	pub fn define_component( &mut self, definition: &ComponentDefinition ) {
		self.registry.define_component( definition );
	}

	/// Registers the component produced by `factory` under `id`.
	pub fn pack( &mut self, id: DependencyId, factory: impl FnOnce() -> Component ) {
		self.registry.pack( id, factory );
	}

	#[inline] pub fn registry( &self ) -> &Registry { &self.registry }

	#[inline] pub fn scheduler( &self ) -> &S { self.resolver.scheduler() }

}

impl<S: Scheduler> Loader for TestLoader<S> {

	fn register( &mut self, id: DependencyId, entry: Entry ) {
		self.registry.insert( id, entry );
	}

	fn load( &self, ids: NEVec<&str> ) -> Result<Deferred, LoadError> {
		self.resolver.load( &self.registry, ids )
	}

}
