//! Point-cloud provider reading one `x,y,z` triple per line.
//!
//! Blank lines are skipped and both `\n` and `\r\n` endings are accepted.
//! Line numbers in errors are 1-based and count blank lines, so they match
//! what an editor shows.

use std::io::{self, BufRead};

use linkage_core::{ParsePointError, Point3};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while loading a point cloud.
#[derive(Debug, Error)]
pub enum PointCloudError {
    /// The input contained no points.
    #[error("point cloud contains no points")]
    EmptyInput,
    /// Reading from the underlying source failed.
    #[error("failed to read point cloud: {source}")]
    Io {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },
    /// A line could not be parsed as a point.
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number of the offending line.
        line: usize,
        /// Parse failure for that line.
        #[source]
        source: ParsePointError,
    },
}

/// A named, ordered collection of 3-D points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointCloud {
    name: String,
    points: Vec<Point3>,
}

impl PointCloud {
    /// Creates a point cloud from already parsed points.
    ///
    /// # Errors
    /// Returns [`PointCloudError::EmptyInput`] when `points` is empty.
    ///
    /// # Examples
    /// ```
    /// use linkage_core::Point3;
    /// use linkage_providers_points::PointCloud;
    ///
    /// let cloud = PointCloud::new("demo", vec![Point3::new(1, 2, 3)])?;
    /// assert_eq!(cloud.len(), 1);
    /// # Ok::<(), linkage_providers_points::PointCloudError>(())
    /// ```
    pub fn new(name: impl Into<String>, points: Vec<Point3>) -> Result<Self, PointCloudError> {
        if points.is_empty() {
            return Err(PointCloudError::EmptyInput);
        }
        Ok(Self {
            name: name.into(),
            points,
        })
    }

    /// Reads a point cloud from `reader`.
    ///
    /// # Errors
    /// Returns [`PointCloudError::Io`] when reading fails,
    /// [`PointCloudError::Parse`] for the first malformed line, and
    /// [`PointCloudError::EmptyInput`] when no points were found.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use linkage_providers_points::PointCloud;
    ///
    /// let cloud = PointCloud::try_from_reader("demo", Cursor::new("1,2,3\r\n\n4,5,6\n"))?;
    /// assert_eq!(cloud.len(), 2);
    /// # Ok::<(), linkage_providers_points::PointCloudError>(())
    /// ```
    #[instrument(name = "points.read", err, skip_all, fields(name = tracing::field::Empty))]
    pub fn try_from_reader<R>(name: impl Into<String>, reader: R) -> Result<Self, PointCloudError>
    where
        R: BufRead,
    {
        let name = name.into();
        tracing::Span::current().record("name", name.as_str());
        let mut points = Vec::new();
        let mut blank = 0usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                blank = blank.saturating_add(1);
                continue;
            }
            let point = line.parse().map_err(|source| PointCloudError::Parse {
                line: index.saturating_add(1),
                source,
            })?;
            points.push(point);
        }
        debug!(points = points.len(), blank_lines = blank, "parsed point cloud");
        Self::new(name, points)
    }

    /// Returns the cloud's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the points in input order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the cloud holds no points. Constructed clouds are
    /// never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the cloud, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}
