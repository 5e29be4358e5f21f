//! Minimal owned n-dimensional array used as the transform container.
//!
//! Storage is always contiguous and row-major. Transforms never mutate their
//! input: every operation reads an [`Array`] by reference and allocates a new
//! one for the result.

use alloc::vec;
use alloc::vec::Vec;

use crate::fft::FftError;
use crate::num::{Complex, Float};

/// Runtime dtype tag.
///
/// Names follow the array-API convention, where the complex width counts both
/// components: `Complex64` holds two `f32`, `Complex128` holds two `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Float32,
    Float64,
    Complex64,
    Complex128,
}

impl DType {
    pub fn is_complex(self) -> bool {
        matches!(self, DType::Complex64 | DType::Complex128)
    }

    /// Complex dtype with the same component precision.
    pub fn to_complex(self) -> DType {
        match self {
            DType::Float32 | DType::Complex64 => DType::Complex64,
            DType::Float64 | DType::Complex128 => DType::Complex128,
        }
    }

    /// Real dtype with the same component precision.
    pub fn to_real(self) -> DType {
        match self {
            DType::Float32 | DType::Complex64 => DType::Float32,
            DType::Float64 | DType::Complex128 => DType::Float64,
        }
    }
}

impl core::fmt::Display for DType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Complex64 => "complex64",
            DType::Complex128 => "complex128",
        };
        f.write_str(name)
    }
}

/// Scalar types that can be stored in an [`Array`].
pub trait Element: Copy + Send + Sync + core::fmt::Debug + 'static {
    fn dtype() -> DType;
    /// Value used when zero-padding an axis.
    fn zeroed() -> Self;
}

impl Element for f32 {
    fn dtype() -> DType {
        DType::Float32
    }
    fn zeroed() -> Self {
        0.0
    }
}

impl Element for f64 {
    fn dtype() -> DType {
        DType::Float64
    }
    fn zeroed() -> Self {
        0.0
    }
}

impl<T: Float> Element for Complex<T> {
    fn dtype() -> DType {
        T::dtype().to_complex()
    }
    fn zeroed() -> Self {
        Complex::zero()
    }
}

/// Row-major strides, in elements, for `shape`.
pub fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1usize; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Contiguous row-major n-dimensional array.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<E: Element> {
    shape: Vec<usize>,
    strides: Vec<usize>,
    data: Vec<E>,
}

impl<E: Element> Array<E> {
    /// Wrap `data` with the given shape.
    ///
    /// Fails with [`FftError::InvalidArgument`] if the element count does not
    /// match the product of `shape`.
    pub fn from_shape_vec(shape: &[usize], data: Vec<E>) -> Result<Self, FftError> {
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or(FftError::InvalidArgument("shape overflows usize"))?;
        if expected != data.len() {
            return Err(FftError::InvalidArgument(
                "data length does not match shape",
            ));
        }
        Ok(Self {
            shape: shape.to_vec(),
            strides: row_major_strides(shape),
            data,
        })
    }

    /// Build from parts already known to agree.
    pub(crate) fn from_parts(shape: Vec<usize>, data: Vec<E>) -> Self {
        debug_assert_eq!(shape.iter().product::<usize>(), data.len());
        Self {
            strides: row_major_strides(&shape),
            shape,
            data,
        }
    }

    /// One-dimensional array over `data`.
    pub fn from_vec(data: Vec<E>) -> Self {
        Self {
            shape: vec![data.len()],
            strides: vec![1],
            data,
        }
    }

    /// Zero-dimensional array holding `value`.
    pub fn scalar(value: E) -> Self {
        Self {
            shape: Vec::new(),
            strides: Vec::new(),
            data: vec![value],
        }
    }

    pub fn zeros(shape: &[usize]) -> Self {
        let len = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            strides: row_major_strides(shape),
            data: vec![E::zeroed(); len],
        }
    }

    pub fn dtype(&self) -> DType {
        E::dtype()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<E> {
        self.data
    }

    /// Element at a multi-index, or `None` when the index is out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&E> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for ((&i, &dim), &stride) in index.iter().zip(&self.shape).zip(&self.strides) {
            if i >= dim {
                return None;
            }
            offset += i * stride;
        }
        self.data.get(offset)
    }

    /// Elementwise conversion into a new array of the same shape.
    pub fn map<F: Element>(&self, f: impl FnMut(&E) -> F) -> Array<F> {
        Array {
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Float> Array<T> {
    /// Promote a real array to complex with zero imaginary part.
    pub fn to_complex(&self) -> Array<Complex<T>> {
        self.map(|&re| Complex::from_re(re))
    }
}

/// Array whose element type is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyArray {
    Float32(Array<f32>),
    Float64(Array<f64>),
    Complex64(Array<Complex<f32>>),
    Complex128(Array<Complex<f64>>),
}

impl AnyArray {
    pub fn dtype(&self) -> DType {
        match self {
            AnyArray::Float32(_) => DType::Float32,
            AnyArray::Float64(_) => DType::Float64,
            AnyArray::Complex64(_) => DType::Complex64,
            AnyArray::Complex128(_) => DType::Complex128,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            AnyArray::Float32(a) => a.shape(),
            AnyArray::Float64(a) => a.shape(),
            AnyArray::Complex64(a) => a.shape(),
            AnyArray::Complex128(a) => a.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }
}

macro_rules! any_array_from {
    ($ty:ty, $variant:ident) => {
        impl From<Array<$ty>> for AnyArray {
            fn from(a: Array<$ty>) -> Self {
                AnyArray::$variant(a)
            }
        }
    };
}

any_array_from!(f32, Float32);
any_array_from!(f64, Float64);
any_array_from!(Complex<f32>, Complex64);
any_array_from!(Complex<f64>, Complex128);
