use std::sync::{ Arc, Mutex };
use serde_json::json ;
use wire_harness::{ ComponentDefinition, Loader, nev };
use wire_harness::echo::{ self, EchoConfig };

use crate::fixtures::manual_loader ;

#[test]
fn echo_wiring_on_fake_component() {

	let ( mut loader, scheduler ) = manual_loader();
	loader.define_component( &ComponentDefinition::new( id!( "console" )));

	let deferred = loader.load( nev![ "console" ]).unwrap();
	scheduler.run_pending();
	let console = deferred.try_resolve().unwrap().component( 0 ).cloned().unwrap();

	let lines = Arc::new( Mutex::new( Vec::new() ));
	let sink = Arc::clone( &lines );
	let config: EchoConfig = serde_json::from_value( json!({ "configName": "demo" })).unwrap();
	console.wire_in( echo::wiring_with_sink( config, move | line | sink.lock().unwrap().push( line.to_string() ))).unwrap();

	console.call( "echo", &[ json!( "first" ) ]).unwrap();
	console.call( "echo", &[ json!({ "structured": true }) ]).unwrap();

	assert_eq!( *lines.lock().unwrap(), vec![
		"Initialized with the config of demo".to_string(),
		"first".to_string(),
		r#"{"structured":true}"#.to_string(),
	]);

}

#[test]
fn echo_wiring_logs_through_tracing_by_default() {

	let ( mut loader, scheduler ) = manual_loader();
	loader.define_component( &ComponentDefinition::new( id!( echo::ID )));

	let deferred = loader.load( nev![ echo::ID ]).unwrap();
	scheduler.run_pending();
	let host = deferred.try_resolve().unwrap().component( 0 ).cloned().unwrap();

	host.wire_in( echo::wiring( EchoConfig::default() )).unwrap();
	assert!( host.call( "echo", &[ json!( "no subscriber installed" ) ]).is_ok() );

}
