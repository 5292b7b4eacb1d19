//! Schedulers decide when a successful load completes.
//!
//! Real dependency loading is asynchronous, so callers must never rely on a load
//! finishing synchronously. The [`Resolver`]( crate::Resolver ) hands its completion
//! to a [`Scheduler`] instead of finishing inline; tests pick the scheduler that gives
//! them the timing control they need.

use std::collections::VecDeque ;
use std::sync::{ Arc, Mutex, PoisonError };
use std::thread ;
use std::time::Duration ;
use tokio::runtime::Handle ;
use tracing::debug ;



/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send> ;

/// Runs completion tasks at some later point.
///
/// Implementations must eventually run every task they accept, otherwise the
/// corresponding [`Deferred`]( crate::Deferred ) never fulfils.
pub trait Scheduler {
	fn schedule( &self, task: Task );
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
	fn schedule( &self, task: Task ) { ( **self ).schedule( task ) }
}

/// Runs each task after a fixed, non-zero delay.
///
/// Inside a Tokio runtime the delay is a spawned [`tokio::time::sleep`], so paused test
/// time applies. Outside of one, the task runs on a short-lived thread instead.
#[derive( Debug, Clone, Copy, PartialEq, Eq )]
pub struct TokioScheduler {
	delay: Duration,
}

impl TokioScheduler {

	/// Delay used by [`TokioScheduler::default`].
	pub const DEFAULT_DELAY: Duration = Duration::from_millis( 10 );

	/// Shortest delay a scheduler accepts.
	pub const MIN_DELAY: Duration = Duration::from_millis( 1 );

	/// Creates a scheduler with the given delay, raised to [`MIN_DELAY`]( Self::MIN_DELAY ) if shorter.
	pub fn new( delay: Duration ) -> Self { Self { delay: delay.max( Self::MIN_DELAY ) }}

	#[inline] pub fn delay( &self ) -> Duration { self.delay }

}

impl Default for TokioScheduler {
	fn default() -> Self { Self::new( Self::DEFAULT_DELAY ) }
}

impl Scheduler for TokioScheduler {
	fn schedule( &self, task: Task ) {
		let delay = self.delay ;
		match Handle::try_current() {
			Ok( handle ) => { handle.spawn( async move {
				tokio::time::sleep( delay ).await ;
				task();
			}); }
			Err( _ ) => {
				debug!( ?delay, "no Tokio runtime, completing on a thread" );
				thread::spawn( move || {
					thread::sleep( delay );
					task();
				});
			}
		}
	}
}

/// Queues tasks until the caller explicitly runs them.
///
/// `ManualScheduler` is a handle type: clones share the same queue, so a test can
/// keep one handle while the loader owns another.
#[derive( Clone, Default )]
pub struct ManualScheduler {
	queue: Arc<Mutex<VecDeque<Task>>>,
}

impl ManualScheduler {

	pub fn new() -> Self { Self::default() }

	/// Number of tasks waiting to run.
	pub fn pending( &self ) -> usize {
		self.queue.lock().unwrap_or_else( PoisonError::into_inner ).len()
	}

	/// Runs every queued task in scheduling order and returns how many ran.
	///
	/// Tasks scheduled while running are run as well.
	pub fn run_pending( &self ) -> usize {
		let mut ran = 0 ;
		loop {
			// The guard is dropped here so that tasks may schedule more work.
			let next = self.queue.lock().unwrap_or_else( PoisonError::into_inner ).pop_front();
			let Some( task ) = next else { break };
			task();
			ran += 1 ;
		}
		debug!( ran, "ran pending tasks" );
		ran
	}

}

impl Scheduler for ManualScheduler {
	fn schedule( &self, task: Task ) {
		self.queue.lock().unwrap_or_else( PoisonError::into_inner ).push_back( task );
	}
}

impl std::fmt::Debug for ManualScheduler {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ManualScheduler" )
			.field( "pending", &self.pending() )
			.finish()
	}
}

#[cfg( test )]
mod tests {

	use std::sync::atomic::{ AtomicUsize, Ordering };
	use super::* ;

	#[test]
	fn manual_scheduler_runs_in_order_on_demand() {
		let scheduler = ManualScheduler::new();
		let log = Arc::new( Mutex::new( Vec::new() ));
		for n in 0..3 {
			let log = Arc::clone( &log );
			scheduler.schedule( Box::new( move || log.lock().unwrap().push( n )));
		}
		assert_eq!( scheduler.pending(), 3 );
		assert!( log.lock().unwrap().is_empty() );
		assert_eq!( scheduler.run_pending(), 3 );
		assert_eq!( *log.lock().unwrap(), vec![ 0, 1, 2 ]);
		assert_eq!( scheduler.pending(), 0 );
	}

	#[test]
	fn manual_scheduler_runs_tasks_scheduled_by_tasks() {
		let scheduler = ManualScheduler::new();
		let counter = Arc::new( AtomicUsize::new( 0 ));
		let inner = scheduler.clone();
		let count = Arc::clone( &counter );
		scheduler.schedule( Box::new( move || {
			count.fetch_add( 1, Ordering::SeqCst );
			inner.schedule( Box::new( move || { count.fetch_add( 1, Ordering::SeqCst ); }));
		}));
		assert_eq!( scheduler.run_pending(), 2 );
		assert_eq!( counter.load( Ordering::SeqCst ), 2 );
	}

	#[test]
	fn default_delay_is_ten_milliseconds() {
		assert_eq!( TokioScheduler::default().delay(), Duration::from_millis( 10 ));
	}

	#[test]
	fn zero_delay_is_raised_to_the_minimum() {
		assert_eq!( TokioScheduler::new( Duration::ZERO ).delay(), TokioScheduler::MIN_DELAY );
		assert_eq!( TokioScheduler::new( Duration::from_secs( 2 )).delay(), Duration::from_secs( 2 ));
	}

	#[test]
	fn tokio_scheduler_runs_later_without_a_runtime() {
		let ( sender, receiver ) = std::sync::mpsc::channel();
		TokioScheduler::default().schedule( Box::new( move || { let _ = sender.send(()); }));
		assert!( receiver.try_recv().is_err() );
		assert!( receiver.recv_timeout( Duration::from_secs( 5 )).is_ok() );
	}

}
