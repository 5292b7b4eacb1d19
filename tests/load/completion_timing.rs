use std::time::Duration ;
use wire_harness::{
	DependencyId, Export, LoadState, Loader, Scheduler, Task, TestLoader, TokioScheduler, nev,
};

use crate::fixtures::manual_loader ;

#[test]
fn load_is_not_fulfilled_until_the_scheduler_runs() {

	let ( mut loader, scheduler ) = manual_loader();
	loader.define_export( id!( "jquery" ), Export::new(()));

	let deferred = loader.load( nev![ "jquery" ]).unwrap();
	assert_eq!( scheduler.pending(), 1 );
	assert_eq!( deferred.state(), LoadState::Scheduled );

	let deferred = match deferred.try_resolve() {
		Err( deferred ) => deferred,
		Ok( resolution ) => panic!( "Expected a pending load, found: {:#?}", resolution ),
	};

	scheduler.run_pending();
	assert_eq!( deferred.state(), LoadState::Fulfilled );
	assert!( deferred.try_resolve().is_ok() );

}

#[tokio::test( start_paused = true )]
async fn load_with_zero_delay_is_still_pending_on_return() {

	let mut loader = TestLoader::with_scheduler( TokioScheduler::new( Duration::ZERO ));
	loader.define_export( id!( "jquery" ), Export::new(()));

	let deferred = loader.load( nev![ "jquery" ]).unwrap();
	assert_eq!( deferred.state(), LoadState::Scheduled );
	let deferred = match deferred.try_resolve() {
		Err( deferred ) => deferred,
		Ok( resolution ) => panic!( "Expected a pending load, found: {:#?}", resolution ),
	};

	deferred.await ;

}

/// Accepts tasks and throws them away.
struct DroppingScheduler ;

impl Scheduler for DroppingScheduler {
	fn schedule( &self, task: Task ) { drop( task ) }
}

#[tokio::test( start_paused = true )]
async fn load_stays_pending_when_the_scheduler_drops_it() {

	let mut loader = TestLoader::with_scheduler( DroppingScheduler );
	loader.define_export( id!( "jquery" ), Export::new(()));

	let deferred = loader.load( nev![ "jquery" ]).unwrap();
	assert_eq!( deferred.state(), LoadState::Scheduled );
	let deferred = match deferred.try_resolve() {
		Err( deferred ) => deferred,
		Ok( resolution ) => panic!( "Expected a pending load, found: {:#?}", resolution ),
	};

	assert!( tokio::time::timeout( Duration::from_secs( 60 ), deferred ).await.is_err() );

}

#[tokio::test( start_paused = true )]
async fn load_on_tokio_waits_for_the_delay() {

	let mut loader = TestLoader::new();
	assert_eq!( loader.scheduler().delay(), TokioScheduler::DEFAULT_DELAY );
	loader.define_export( DependencyId::new( "jquery" ).unwrap(), Export::new( 1_u8 ));

	let started = tokio::time::Instant::now();
	let deferred = loader.load( nev![ "jquery" ]).unwrap();
	assert_eq!( deferred.state(), LoadState::Scheduled );

	let resolution = deferred.await ;
	assert!( started.elapsed() >= TokioScheduler::DEFAULT_DELAY );
	assert_eq!( resolution.export( 0 ).and_then( Export::downcast_ref::<u8> ), Some( &1 ));

}

#[tokio::test( start_paused = true )]
async fn load_on_tokio_honours_a_custom_delay() {

	let delay = Duration::from_secs( 3 );
	let mut loader = TestLoader::with_scheduler( TokioScheduler::new( delay ));
	loader.define_export( id!( "jquery" ), Export::new(()));

	let deferred = loader.load( nev![ "jquery" ]).unwrap();

	tokio::time::sleep( Duration::from_secs( 1 )).await ;
	assert_eq!( deferred.state(), LoadState::Scheduled );

	let started = tokio::time::Instant::now();
	deferred.await ;
	assert!( started.elapsed() >= Duration::from_secs( 2 ));

}
