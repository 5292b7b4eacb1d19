//! A sample reusable wiring.
//!
//! Anything that wires in [`wiring`] gets an `echo` method that writes its message
//! to the diagnostic output. The wiring announces its configuration when it is
//! wired in.
//!
//! ```
//! # use wire_harness::{ Blueprint, Component };
//! use wire_harness::echo::{ self, EchoConfig };
//!
//! let config: EchoConfig = serde_json::from_str( r#"{ "configName": "sample" }"# ).unwrap();
//! let component = Component::new( Blueprint::new( "greeter" ));
//! component.wire_in( echo::wiring( config )).unwrap();
//! assert!( component.has_method( "echo" ));
//! ```

use serde::{ Deserialize, Serialize };
use serde_json::Value ;
use tracing::info ;

use crate::Wiring ;



/// Identifier the echo wiring is usually registered under.
pub const ID: &str = "wirings/echo" ;

/// Configuration accepted by the echo wiring.
#[derive( Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize )]
#[serde( rename_all = "camelCase" )]
pub struct EchoConfig {
	/// Announced when the wiring is wired in.
	#[serde( default )]
	pub config_name: String,
}

/// Builds the echo wiring, writing messages as `tracing` events.
pub fn wiring( config: EchoConfig ) -> Wiring {
	wiring_with_sink( config, | message | info!( target: "echo", "{}", message ))
}

/// Builds the echo wiring, writing messages to `sink`.
pub fn wiring_with_sink( config: EchoConfig, sink: impl Fn( &str ) + Send + Sync + 'static ) -> Wiring {
	Wiring::new()
		.with_method( "echo", move | _, args | {
			match args.first() {
				Some( Value::String( message )) => sink( message ),
				Some( other ) => sink( &other.to_string() ),
				None => sink( "" ),
			}
			Value::Null
		})
		.with_init( move | component | {
			let message = format!( "Initialized with the config of {}", config.config_name );
			component.call( "echo", &[ Value::String( message ) ]).map( drop )
		})
}

#[cfg( test )]
mod tests {

	use std::sync::{ Arc, Mutex };
	use serde_json::json ;
	use crate::{ Blueprint, Component, ComponentError };
	use super::* ;

	#[test]
	fn announces_config_and_echoes() {
		let lines = Arc::new( Mutex::new( Vec::<String>::new() ));
		let sink = Arc::clone( &lines );
		let component = Component::new( Blueprint::new( "host" ));
		component.wire_in( wiring_with_sink(
			EchoConfig { config_name: "sample".to_string() },
			move | line | sink.lock().unwrap().push( line.to_string() ),
		)).unwrap();
		component.call( "echo", &[ json!( "hello" ) ]).unwrap();
		assert_eq!( *lines.lock().unwrap(), vec![
			"Initialized with the config of sample".to_string(),
			"hello".to_string(),
		]);
	}

	#[test]
	fn config_reads_camel_case() {
		let config: EchoConfig = serde_json::from_value( json!({ "configName": "x" })).unwrap();
		assert_eq!( config.config_name, "x" );
		assert_eq!( serde_json::from_value::<EchoConfig>( json!({})).unwrap(), EchoConfig::default() );
	}

	#[test]
	fn unknown_method_is_reported() {
		let component = Component::new( Blueprint::new( "host" ));
		assert_eq!(
			component.call( "echo", &[] ),
			Err( ComponentError::UnknownMethod( "echo".to_string() )),
		);
	}

}
