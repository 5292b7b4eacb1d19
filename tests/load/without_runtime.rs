use std::thread ;
use std::time::{ Duration, Instant };
use wire_harness::{ ComponentDefinition, Export, LoadState, Loader, TestLoader, TokioScheduler, nev };

#[test]
fn default_loader_completes_without_a_runtime() {

	let mut loader = TestLoader::new();
	loader.define_export( id!( "jquery" ), Export::new( "$" ));
	loader.define_component( &ComponentDefinition::new( id!( "widget" )).with_methods([ "render" ]));

	let started = Instant::now();
	let deferred = loader.load( nev![ "jquery", "widget" ]).unwrap();
	assert_eq!( deferred.state(), LoadState::Scheduled );

	while deferred.state() == LoadState::Scheduled {
		assert!( started.elapsed() < Duration::from_secs( 5 ), "load never completed" );
		thread::sleep( Duration::from_millis( 1 ));
	}
	assert!( started.elapsed() >= TokioScheduler::DEFAULT_DELAY );

	let resolution = match deferred.try_resolve() {
		Ok( resolution ) => resolution,
		Err( deferred ) => panic!( "Expected a fulfilled load, found: {:#?}", deferred ),
	};
	assert_eq!( resolution.export( 0 ).and_then( Export::downcast_ref::<&str> ), Some( &"$" ));
	assert!( resolution.component( 1 ).unwrap().has_method( "render" ));

}

#[test]
fn unknown_id_is_rejected_without_a_runtime() {
	let loader = TestLoader::new();
	assert_unresolved!( loader.load( nev![ "jquery" ]), "jquery" );
}
