use std::future::Future ;
use std::num::NonZeroUsize ;
use std::pin::Pin ;
use std::sync::Arc ;
use std::sync::atomic::{ AtomicBool, Ordering };
use std::task::{ Context, Poll };
use nonempty_collections::NEVec ;
use tokio::sync::oneshot ;

use crate::{ Component, Entry, Export };



/// Observable state of a load that passed validation.
///
/// A load that fails validation never produces a [`Deferred`]; it is rejected
/// synchronously instead.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub enum LoadState {
	/// Every id resolved and completion is waiting on the scheduler.
	Scheduled,
	/// The scheduler ran the completion; the resolution is ready to be taken.
	Fulfilled,
}

impl std::fmt::Display for LoadState {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result { write!( f, "{:?}", self )}
}

/// The values a load resolved to, in the order they were requested.
///
/// Never empty. Requesting the same id more than once yields the same value at
/// every position it was requested.
#[derive( Debug, Clone )]
pub struct Resolution( NEVec<Entry> );

impl Resolution {

	pub(crate) fn new( entries: NEVec<Entry> ) -> Self { Self( entries )}

	#[inline] pub fn len( &self ) -> NonZeroUsize { self.0.len() }

	#[inline] pub fn get( &self, index: usize ) -> Option<&Entry> { self.0.get( index ) }

	/// Returns the export at `index`, if that position holds one.
	#[inline] pub fn export( &self, index: usize ) -> Option<&Export> { self.get( index ).and_then( Entry::as_export ) }

	/// Returns the component at `index`, if that position holds one.
	#[inline] pub fn component( &self, index: usize ) -> Option<&Component> { self.get( index ).and_then( Entry::as_component ) }

	#[inline] pub fn iter( &self ) -> std::slice::Iter<'_, Entry> { self.0.iter() }

	#[inline] pub fn into_entries( self ) -> NEVec<Entry> { self.0 }

}

impl IntoIterator for Resolution {
	type Item = Entry ;
	type IntoIter = std::vec::IntoIter<Entry> ;
	fn into_iter( self ) -> Self::IntoIter { Vec::from( self.0 ).into_iter() }
}

impl<'a> IntoIterator for &'a Resolution {
	type Item = &'a Entry ;
	type IntoIter = std::slice::Iter<'a, Entry> ;
	fn into_iter( self ) -> Self::IntoIter { self.0.iter() }
}

/// Handle to a load that is waiting on its scheduler.
///
/// Await it to get the [`Resolution`], or use [`try_resolve`]( Self::try_resolve )
/// to check without a runtime. There is no cancellation and no timeout: if the
/// scheduler never runs the completion, the handle stays pending forever.
#[derive( Debug )]
#[must_use = "a Deferred does nothing unless awaited or resolved"]
pub struct Deferred {
	receiver: oneshot::Receiver<Resolution>,
	fulfilled: Arc<AtomicBool>,
}

/// Sending half of a [`Deferred`], moved into the scheduled completion.
pub(crate) struct Fulfil {
	sender: oneshot::Sender<Resolution>,
	fulfilled: Arc<AtomicBool>,
}

impl Fulfil {
	pub(crate) fn fulfil( self, resolution: Resolution ) {
		// A dropped receiver means nobody is waiting anymore.
		let _ = self.sender.send( resolution );
		// Set after sending, so `Fulfilled` always means the resolution can be taken.
		self.fulfilled.store( true, Ordering::Release );
	}
}

impl Deferred {

	pub(crate) fn channel() -> ( Fulfil, Self ) {
		let ( sender, receiver ) = oneshot::channel();
		let fulfilled = Arc::new( AtomicBool::new( false ));
		( Fulfil { sender, fulfilled: Arc::clone( &fulfilled ) }, Self { receiver, fulfilled })
	}

	pub fn state( &self ) -> LoadState {
		match self.fulfilled.load( Ordering::Acquire ) {
			true => LoadState::Fulfilled,
			false => LoadState::Scheduled,
		}
	}

	/// Takes the resolution if the load has been fulfilled, otherwise hands the
	/// handle back.
	///
	/// # Errors
	/// Returns `self` unchanged while the load is still scheduled.
	pub fn try_resolve( mut self ) -> Result<Resolution, Self> {
		match self.receiver.try_recv() {
			Ok( resolution ) => Ok( resolution ),
			Err( _ ) => Err( self ),
		}
	}

}

impl Future for Deferred {
	type Output = Resolution ;

	fn poll( mut self: Pin<&mut Self>, cx: &mut Context<'_> ) -> Poll<Self::Output> {
		match Pin::new( &mut self.receiver ).poll( cx ) {
			Poll::Ready( Ok( resolution )) => Poll::Ready( resolution ),
			// The scheduler dropped the completion without running it.
			Poll::Ready( Err( _ )) | Poll::Pending => Poll::Pending,
		}
	}
}

#[cfg( test )]
mod tests {

	use nonempty_collections::nev ;
	use super::* ;

	#[test]
	fn fulfilling_flips_the_state() {
		let ( fulfil, deferred ) = Deferred::channel();
		assert_eq!( deferred.state(), LoadState::Scheduled );
		let deferred = deferred.try_resolve().unwrap_err();
		fulfil.fulfil( Resolution::new( nev![ Entry::Export( Export::new( 7_u8 )) ]));
		assert_eq!( deferred.state(), LoadState::Fulfilled );
		let resolution = deferred.try_resolve().unwrap();
		assert_eq!( resolution.export( 0 ).and_then( Export::downcast_ref::<u8> ), Some( &7 ));
	}

}
