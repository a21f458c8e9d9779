pub mod laplacian;
