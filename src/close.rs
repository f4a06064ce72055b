use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Empty, Write};
use std::net::{Shutdown, TcpStream};
use std::ops::{Deref, DerefMut};
use std::panic::{self, AssertUnwindSafe};

/// A resource that is released by an explicit, fallible close.
///
/// Closing consumes the resource, so it can be closed at most once.
pub trait Close {
    fn close(self) -> std::io::Result<()>;
}

/// Close `resource`, discarding any failure.
///
/// `None` is a no-op. Both an error returned by [Close::close] and a panic
/// raised inside it are swallowed, and nothing else is called on the
/// resource.
pub fn close_quietly<C: Close>(resource: Option<C>) {
    let Some(resource) = resource else {
        return;
    };

    match panic::catch_unwind(AssertUnwindSafe(move || resource.close())) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => log::trace!("ignoring close failure: {}", err),
        Err(_) => log::trace!("ignoring panic raised while closing"),
    }
}

/// Owns a resource and closes it quietly when dropped.
///
/// The guard closes on every exit path of the owning scope, including
/// early returns through `?` and unwinding.
pub struct Closing<C: Close> {
    resource: Option<C>,
}

impl<C: Close> Closing<C> {
    pub fn new(resource: C) -> Self {
        Self {
            resource: Some(resource),
        }
    }
}

impl<C: Close> Deref for Closing<C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.resource
            .as_ref()
            .unwrap_or_else(|| unreachable!("resource is only taken on drop"))
    }
}

impl<C: Close> DerefMut for Closing<C> {
    fn deref_mut(&mut self) -> &mut C {
        self.resource
            .as_mut()
            .unwrap_or_else(|| unreachable!("resource is only taken on drop"))
    }
}

impl<C: Close> Drop for Closing<C> {
    fn drop(&mut self) {
        close_quietly(self.resource.take());
    }
}

impl Close for File {
    fn close(self) -> std::io::Result<()> {
        drop(self);
        Ok(())
    }
}

impl Close for TcpStream {
    fn close(self) -> std::io::Result<()> {
        self.shutdown(Shutdown::Both)
    }
}

impl Close for &[u8] {
    fn close(self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<T> Close for Cursor<T> {
    fn close(self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Close for Empty {
    fn close(self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<R: Close> Close for BufReader<R> {
    fn close(self) -> std::io::Result<()> {
        self.into_inner().close()
    }
}

/// Pending output is flushed before the inner writer is closed
impl<W: Write + Close> Close for BufWriter<W> {
    fn close(self) -> std::io::Result<()> {
        let inner = self.into_inner().map_err(|err| err.into_error())?;
        inner.close()
    }
}

impl<C: Close> Close for Box<C> {
    fn close(self) -> std::io::Result<()> {
        (*self).close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::{Error, ErrorKind};
    use std::rc::Rc;

    enum Outcome {
        Closed,
        Fails,
        Panics,
    }

    struct Tracked {
        calls: Rc<RefCell<Vec<&'static str>>>,
        outcome: Outcome,
    }

    impl Tracked {
        fn new(outcome: Outcome) -> (Self, Rc<RefCell<Vec<&'static str>>>) {
            let calls = Rc::new(RefCell::new(vec![]));
            let tracked = Self {
                calls: calls.clone(),
                outcome,
            };
            (tracked, calls)
        }
    }

    impl Close for Tracked {
        fn close(self) -> std::io::Result<()> {
            self.calls.borrow_mut().push("close");
            match self.outcome {
                Outcome::Closed => Ok(()),
                Outcome::Fails => {
                    Err(Error::new(ErrorKind::Other, "disk went away"))
                }
                Outcome::Panics => panic!("close blew up"),
            }
        }
    }

    #[test]
    fn none_is_ignored() {
        close_quietly::<File>(None);
    }

    #[test]
    fn closes_exactly_once() {
        let (resource, calls) = Tracked::new(Outcome::Closed);
        close_quietly(Some(resource));
        assert_eq!(*calls.borrow(), vec!["close"]);
    }

    #[test]
    fn close_error_is_swallowed() {
        let (resource, calls) = Tracked::new(Outcome::Fails);
        close_quietly(Some(resource));
        assert_eq!(*calls.borrow(), vec!["close"]);
    }

    #[test]
    fn close_panic_is_swallowed() {
        let (resource, calls) = Tracked::new(Outcome::Panics);
        close_quietly(Some(resource));
        assert_eq!(*calls.borrow(), vec!["close"]);
    }

    #[test]
    fn guard_closes_on_drop() {
        let (resource, calls) = Tracked::new(Outcome::Fails);
        {
            let _guard = Closing::new(resource);
            assert!(calls.borrow().is_empty());
        }
        assert_eq!(*calls.borrow(), vec!["close"]);
    }

    #[test]
    fn buffered_writer_flushes_on_close() {
        let dir = tempdir::TempDir::new("close_test").unwrap();
        let path = dir.path().join("out.css");
        let mut writer = BufWriter::new(File::create(&path).unwrap());
        writer.write_all(b"a { color: red; }").unwrap();
        writer.close().unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "a { color: red; }"
        );
    }
}
