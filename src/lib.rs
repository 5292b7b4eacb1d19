//! A test harness for component wiring.
//!
//! Components expose named methods and events and declare the ids of the dependencies
//! they need. A loader resolves those ids asynchronously. `wire_harness` replaces the
//! real loader in unit tests: the test registers exactly the dependencies it wants,
//! usually as inert fakes, and the code under test loads them through the same
//! [`Loader`] interface it uses in production.
//!
//! # Core Concepts
//!
//! - [`Registry`]: A caller-owned map from [`DependencyId`] to [`Entry`]. Exports and
//! 	components share one namespace; registering an id again replaces the old entry.
//!
//! - [`Export`]: An opaque value registered verbatim, typically a stand-in for a
//! 	third-party library.
//!
//! - [`Component`]: A handle to a component with methods, events and a dependency list.
//! 	[`fake_component`] builds one from a [`ComponentDefinition`] whose methods do nothing.
//!
//! - [`Wiring`]: Reusable behaviour mixed into a component with [`Component::wire_in`].
//! 	Wiring into a fake drops the wiring's dependencies, so a fake never drags real
//! 	dependencies into a test.
//!
//! - [`Resolver`]: Turns a non-empty list of ids into a [`Deferred`] resolution, in
//! 	request order. A missing id is rejected synchronously with
//! 	[`LoadError::UnresolvedDependency`]; nothing is ever partially resolved.
//!
//! - [`Scheduler`]: Decides when a resolution completes. Loads never complete before
//! 	the caller holds the [`Deferred`]:
//! 	- [`TokioScheduler`] - after a fixed, non-zero delay (10 ms by default), on the
//! 	  Tokio runtime when there is one and on a helper thread otherwise
//! 	- [`ManualScheduler`] - whenever the test calls [`ManualScheduler::run_pending`]
//!
//! - [`Loader`]: The {register, resolve} capability. [`TestLoader`] implements it on top
//! 	of a [`Registry`] and a [`Resolver`].
//!
//! # Example
//!
//! ```
//! use wire_harness::{ ComponentDefinition, DependencyId, Export, Loader, TestLoader, nev };
//!
//! struct FakeJQuery ;
//!
//! # #[tokio::main( flavor = "current_thread" )]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut loader = TestLoader::new();
//! loader.define_export( DependencyId::new( "jquery" )?, Export::new( FakeJQuery ));
//! loader.define_component( &ComponentDefinition::new( DependencyId::new( "widget" )? )
//! 	.with_methods([ "render" ])
//! 	.with_events([ "clicked" ])
//! );
//!
//! // Resolution is asynchronous even though nothing is fetched.
//! let resolution = loader.load( nev![ "jquery", "widget" ])?.await ;
//! assert!( resolution.export( 0 ).unwrap().is::<FakeJQuery>() );
//! assert!( resolution.component( 1 ).unwrap().has_event( "clicked" ));
//!
//! // Unknown ids fail before anything is scheduled.
//! assert!( loader.load( nev![ "missing" ]).is_err() );
//!
//! // Nothing survives a reset.
//! loader.reset();
//! assert!( loader.load( nev![ "jquery" ]).is_err() );
//! # Ok(())
//! # }
//! ```
//!
//! # Deterministic Timing
//!
//! Tests that need to observe the pending state use a [`ManualScheduler`]. Clones share
//! one queue, so the test keeps a handle while the loader owns another.
//!
//! ```
//! # use wire_harness::{ DependencyId, Export, LoadState, Loader, ManualScheduler, TestLoader, nev };
//! let scheduler = ManualScheduler::new();
//! let mut loader = TestLoader::with_scheduler( scheduler.clone() );
//! loader.define_export( DependencyId::new( "underscore" ).unwrap(), Export::new( "_" ));
//!
//! let deferred = loader.load( nev![ "underscore" ]).unwrap();
//! assert_eq!( deferred.state(), LoadState::Scheduled );
//!
//! scheduler.run_pending();
//! assert_eq!( deferred.state(), LoadState::Fulfilled );
//! assert!( deferred.try_resolve().is_ok() );
//! ```

mod dependency_id ;
mod export ;
mod component ;
mod wiring ;
mod fake ;
mod registry ;
mod scheduler ;
mod deferred ;
mod resolver ;
mod loader ;
pub mod echo ;

#[doc( no_inline )]
pub use nonempty_collections::{ NEVec, nev };

pub use dependency_id::{ DependencyId, InvalidId };
pub use export::Export ;
pub use component::{ Blueprint, Component, ComponentError, InitHook, Method, WireIn };
pub use wiring::{ Wiring, WiringInit };
pub use fake::{ ComponentDefinition, FAKE_EVENT_DESCRIPTOR, fake_component };
pub use registry::{ Entry, Registry };
pub use scheduler::{ Scheduler, Task, TokioScheduler, ManualScheduler };
pub use deferred::{ Deferred, LoadState, Resolution };
pub use resolver::{ LoadError, Resolver };
pub use loader::{ Loader, TestLoader };
