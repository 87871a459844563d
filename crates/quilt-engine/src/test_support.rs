//! Recording target for tests: stores every draw it receives.

use core::any::Any;
use core::ops::Range;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::coords::Rect;
use crate::error::BatchError;
use crate::picture::Picture;
use crate::target::{Target, TargetId, TargetPicture, TargetTriangles};
use crate::vertex::{
    Triangles, TrianglesColor, TrianglesData, TrianglesPicture, TrianglesPosition, Vertex,
};

#[derive(Debug, Clone)]
pub(crate) struct RecordedDraw {
    pub vertices: Vec<Vertex>,
    pub textured: bool,
}

type Log = Rc<RefCell<Vec<RecordedDraw>>>;

pub(crate) struct Recorder {
    id: TargetId,
    log: Log,
    made_triangles: usize,
    made_pictures: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::with_id(TargetId::next())
    }

    /// Recorder reporting `id`, e.g. to impersonate another target.
    pub fn with_id(id: TargetId) -> Self {
        Self {
            id,
            log: Log::default(),
            made_triangles: 0,
            made_pictures: 0,
        }
    }

    pub fn draws(&self) -> Ref<'_, Vec<RecordedDraw>> {
        self.log.borrow()
    }

    pub fn made_triangles(&self) -> usize {
        self.made_triangles
    }

    pub fn made_pictures(&self) -> usize {
        self.made_pictures
    }
}

impl Target for Recorder {
    fn target_id(&self) -> TargetId {
        self.id
    }

    fn make_triangles(&mut self, triangles: &dyn Triangles) -> Box<dyn TargetTriangles> {
        self.made_triangles += 1;
        let mut data = TrianglesData::with_len(triangles.len());
        data.update(triangles).unwrap();
        Box::new(RecorderTriangles { data, log: Rc::clone(&self.log) })
    }

    fn make_picture(&mut self, picture: &dyn Picture) -> Box<dyn TargetPicture> {
        self.made_pictures += 1;
        Box::new(RecorderPicture {
            picture: picture.boxed_clone(),
            owner: self.id,
            log: Rc::clone(&self.log),
        })
    }
}

#[derive(Debug)]
struct RecorderTriangles {
    data: TrianglesData,
    log: Log,
}

impl RecorderTriangles {
    fn record(&self, textured: bool) {
        self.log.borrow_mut().push(RecordedDraw { vertices: self.data.to_vec(), textured });
    }
}

impl Triangles for RecorderTriangles {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn set_len(&mut self, len: usize) {
        self.data.set_len(len);
    }

    fn slice(&self, range: Range<usize>) -> Box<dyn Triangles> {
        self.data.slice(range)
    }

    fn update(&mut self, src: &dyn Triangles) -> Result<(), BatchError> {
        self.data.update(src)
    }

    fn copy(&self) -> Box<dyn Triangles> {
        self.data.copy()
    }

    fn as_position(&self) -> Option<&dyn TrianglesPosition> {
        self.data.as_position()
    }

    fn as_color(&self) -> Option<&dyn TrianglesColor> {
        self.data.as_color()
    }

    fn as_picture(&self) -> Option<&dyn TrianglesPicture> {
        self.data.as_picture()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl TargetTriangles for RecorderTriangles {
    fn draw(&mut self) -> Result<(), BatchError> {
        self.record(false);
        Ok(())
    }
}

#[derive(Debug)]
struct RecorderPicture {
    picture: Box<dyn Picture>,
    owner: TargetId,
    log: Log,
}

impl Picture for RecorderPicture {
    fn bounds(&self) -> Rect {
        self.picture.bounds()
    }

    fn slice(&self, bounds: Rect) -> Box<dyn Picture> {
        self.picture.slice(bounds)
    }

    fn original(&self) -> Box<dyn Picture> {
        self.picture.original()
    }

    fn boxed_clone(&self) -> Box<dyn Picture> {
        Box::new(RecorderPicture {
            picture: self.picture.boxed_clone(),
            owner: self.owner,
            log: Rc::clone(&self.log),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl TargetPicture for RecorderPicture {
    fn draw(&self, triangles: &mut dyn TargetTriangles) -> Result<(), BatchError> {
        let Some(t) = triangles.as_any_mut().downcast_mut::<RecorderTriangles>() else {
            return Err(BatchError::OwnershipViolation { expected: self.owner, found: None });
        };
        t.record(true);
        Ok(())
    }
}
