#[macro_export]
macro_rules! id {
	( $id:expr ) => { wire_harness::DependencyId::new( $id ).expect( "fixture ids are never empty" ) };
}

#[macro_export]
macro_rules! assert_unresolved {
	( $result:expr, $id:literal ) => {
		match $result {
			Err( wire_harness::LoadError::UnresolvedDependency { id }) => assert_eq!( id, $id ),
			Ok( _ ) => panic!( "Expected UnresolvedDependency( {} ), load was scheduled", $id ),
		}
	};
}

#[allow( dead_code )]
mod fixtures {

	use wire_harness::{ ManualScheduler, TestLoader };

	/// A loader whose completions only run when the returned scheduler is told to.
	pub fn manual_loader() -> ( TestLoader<ManualScheduler>, ManualScheduler ) {
		let scheduler = ManualScheduler::new();
		( TestLoader::with_scheduler( scheduler.clone() ), scheduler )
	}

	/// Stand-in for a third-party DOM library.
	#[derive( Debug, PartialEq, Eq )]
	pub struct FakeJQuery { pub version: &'static str }

}
