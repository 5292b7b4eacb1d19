use wire_harness::{ Export, Loader, nev };

use crate::fixtures::{ FakeJQuery, manual_loader };

#[test]
fn load_export_resolves_to_the_registered_value() {

	let ( mut loader, scheduler ) = manual_loader();
	let fake_jq = Export::new( FakeJQuery { version: "1.9.1" });
	loader.define_export( id!( "jquery" ), fake_jq.clone() );

	let deferred = loader.load( nev![ "jquery" ]).expect( "jquery is registered" );
	assert_eq!( scheduler.run_pending(), 1 );

	let resolution = deferred.try_resolve().expect( "load was fulfilled" );
	assert_eq!( resolution.len().get(), 1 );
	match resolution.export( 0 ) {
		Some( export ) if export.same_as( &fake_jq ) => {}
		value => panic!( "Expected the registered jquery export, found: {:#?}", value ),
	}
	assert_eq!(
		resolution.export( 0 ).and_then( Export::downcast_ref::<FakeJQuery> ),
		Some( &FakeJQuery { version: "1.9.1" }),
	);

}

#[test]
fn load_export_accepts_no_op_stand_ins() {

	let ( mut loader, scheduler ) = manual_loader();
	loader.define_export( id!( "analytics" ), Export::new(()));

	let deferred = loader.load( nev![ "analytics" ]).unwrap();
	scheduler.run_pending();

	let resolution = deferred.try_resolve().unwrap();
	assert!( resolution.export( 0 ).is_some_and( Export::is::<()> ));

}
