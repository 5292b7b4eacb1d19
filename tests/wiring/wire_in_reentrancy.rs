use std::sync::mpsc ;
use std::thread ;
use std::time::Duration ;
use wire_harness::{ ComponentDefinition, Loader, Wiring, nev };

use crate::fixtures::manual_loader ;

#[test]
fn replace_wire_in_may_read_the_component() {

	let ( mut loader, scheduler ) = manual_loader();
	loader.define_component( &ComponentDefinition::new( id!( "slider" )).with_methods([ "slide" ]));
	let deferred = loader.load( nev![ "slider" ]).unwrap();
	scheduler.run_pending();
	let slider = deferred.try_resolve().unwrap().component( 0 ).cloned().unwrap();

	let ( done, finished ) = mpsc::channel();
	let worker = slider.clone();
	thread::spawn( move || {
		let inner = worker.clone();
		worker.replace_wire_in( move | inherited | {
			let _ = inner.name();
			inherited
		});
		let _ = done.send( worker );
	});

	let slider = match finished.recv_timeout( Duration::from_secs( 5 )) {
		Ok( slider ) => slider,
		Err( err ) => panic!( "Expected replace_wire_in to return, found: {:?}", err ),
	};

	// The fake's severing strategy is still in the chain.
	slider.wire_in( Wiring::new().with_depends([ "jquery" ])).unwrap();
	assert!( slider.depends().is_empty() );

}
