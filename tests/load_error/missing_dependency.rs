use wire_harness::{ LoadError, Loader, nev };

use crate::fixtures::manual_loader ;

#[test]
fn load_error_missing_dependency() {

	let ( loader, scheduler ) = manual_loader();

	assert_unresolved!( loader.load( nev![ "missing" ]), "missing" );
	assert_eq!( scheduler.pending(), 0 );

}

#[test]
fn load_error_message_names_the_id_and_the_fix() {

	let ( loader, _scheduler ) = manual_loader();

	let message = match loader.load( nev![ "missing" ]) {
		Err( err @ LoadError::UnresolvedDependency { .. }) => err.to_string(),
		Ok( _ ) => panic!( "Expected UnresolvedDependency, load was scheduled" ),
	};
	assert!( message.contains( "missing" ), "{}", message );
	assert!( message.contains( "define_export()" ), "{}", message );
	assert!( message.contains( "define_component()" ), "{}", message );

}
