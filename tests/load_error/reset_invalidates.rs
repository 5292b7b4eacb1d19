use wire_harness::{ ComponentDefinition, Export, LoadState, Loader, nev };

use crate::fixtures::manual_loader ;

#[test]
fn load_error_after_reset() {

	let ( mut loader, scheduler ) = manual_loader();
	loader.define_export( id!( "jquery" ), Export::new(()));
	loader.define_component( &ComponentDefinition::new( id!( "widget" )).with_methods([ "render" ]));

	let deferred = loader.load( nev![ "widget" ]).unwrap();
	scheduler.run_pending();
	let widget = deferred.try_resolve().unwrap().component( 0 ).cloned().unwrap();

	loader.reset();
	assert!( loader.registry().is_empty() );

	assert_unresolved!( loader.load( nev![ "jquery" ]), "jquery" );
	assert_unresolved!( loader.load( nev![ "widget" ]), "widget" );

	// Handles resolved before the reset stay usable.
	assert!( widget.call( "render", &[] ).is_ok() );

}

#[test]
fn load_scheduled_before_reset_still_fulfils() {

	let ( mut loader, scheduler ) = manual_loader();
	loader.define_export( id!( "jquery" ), Export::new(()));

	let deferred = loader.load( nev![ "jquery" ]).unwrap();
	loader.reset();
	scheduler.run_pending();

	assert_eq!( deferred.state(), LoadState::Fulfilled );
	assert!( deferred.try_resolve().is_ok() );

}

#[test]
fn load_after_reset_and_redefine() {

	let ( mut loader, scheduler ) = manual_loader();
	loader.define_export( id!( "jquery" ), Export::new( "old" ));
	loader.reset();
	loader.define_export( id!( "jquery" ), Export::new( "new" ));

	let deferred = loader.load( nev![ "jquery" ]).unwrap();
	scheduler.run_pending();
	let resolution = deferred.try_resolve().unwrap();
	assert_eq!( resolution.export( 0 ).and_then( Export::downcast_ref::<&str> ), Some( &"new" ));

}
