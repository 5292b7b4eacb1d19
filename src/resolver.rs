use itertools::Itertools ;
use nonempty_collections::NEVec ;
use thiserror::Error ;
use tracing::debug ;

use crate::{ Deferred, Registry, Resolution, Scheduler };



/// Errors that can occur when loading dependencies.
///
/// Returned synchronously by [`Resolver::load`], before anything is scheduled.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum LoadError {
	/// A requested id is neither a registered export nor a registered component.
	#[error( "Unresolved dependency {id}: register it with define_export() or define_component() before loading" )]
	UnresolvedDependency { id: String },
}

/// Turns lists of ids into asynchronous, ordered resolutions.
///
/// Validation is fail-fast and synchronous: the first id missing from the registry
/// rejects the whole load and nothing is scheduled. Otherwise the values are captured
/// right away and completion is handed to the scheduler, so a load never completes
/// before the caller gets its [`Deferred`] back.
///
/// ```
/// # use wire_harness::{ DependencyId, Export, LoadError, ManualScheduler, Registry, Resolver, nev };
/// let scheduler = ManualScheduler::new();
/// let resolver = Resolver::new( scheduler.clone() );
/// let mut registry = Registry::new();
/// registry.define_export( DependencyId::new( "jquery" ).unwrap(), Export::new( "$" ));
///
/// let deferred = resolver.load( &registry, nev![ "jquery", "jquery" ]).unwrap();
/// scheduler.run_pending();
/// let resolution = deferred.try_resolve().unwrap();
/// assert!( resolution.export( 0 ).unwrap().same_as( resolution.export( 1 ).unwrap() ));
///
/// assert_eq!(
/// 	resolver.load( &registry, nev![ "jquery", "missing" ]).unwrap_err(),
/// 	LoadError::UnresolvedDependency { id: "missing".to_string() },
/// );
/// assert_eq!( scheduler.pending(), 0 );
/// ```
#[derive( Debug, Clone, Default )]
pub struct Resolver<S> {
	scheduler: S,
}

impl<S: Scheduler> Resolver<S> {

	pub fn new( scheduler: S ) -> Self { Self { scheduler }}

	#[inline] pub fn scheduler( &self ) -> &S { &self.scheduler }

	/// Resolves every id against `registry`, preserving request order and duplicates.
	///
	/// # Errors
	/// Returns [`LoadError::UnresolvedDependency`] for the first id that is not registered.
	pub fn load<I: AsRef<str>>( &self, registry: &Registry, ids: NEVec<I> ) -> Result<Deferred, LoadError> {

		let lookup = | id: &I | registry.get( id.as_ref() ).cloned().ok_or_else(|| LoadError::UnresolvedDependency {
			id: id.as_ref().to_string(),
		});
		let ( first, rest ) = ids.split_first();
		let entries = NEVec::from(( lookup( first )?, rest.iter().map( &lookup ).collect::<Result<Vec<_>, _>>()? ));

		debug!( ids = %ids.iter().map( AsRef::<str>::as_ref ).join( ", " ), "scheduling load" );

		let ( fulfil, deferred ) = Deferred::channel();
		let resolution = Resolution::new( entries );
		self.scheduler.schedule( Box::new( move || {
			debug!( count = resolution.len().get(), "load fulfilled" );
			fulfil.fulfil( resolution );
		}));

		Ok( deferred )

	}

}
