use crate::truncation::Truncation;
use faer::Mat;
use num_complex::Complex64;

pub type C64 = Complex64;

const ZERO: C64 = C64::new(0.0, 0.0);
const ONE: C64 = C64::new(1.0, 0.0);

/// Rank-3 site tensor indexed (left bond, physical, right bond).
#[derive(Clone, Debug)]
pub struct Tensor3 {
    pub data: Vec<C64>,
    pub dl: usize,
    pub dp: usize,
    pub dr: usize,
}

impl Tensor3 {
    pub fn zeros(dl: usize, dp: usize, dr: usize) -> Self {
        Self {
            data: vec![ZERO; dl * dp * dr],
            dl,
            dp,
            dr,
        }
    }

    #[inline]
    fn idx(&self, l: usize, p: usize, r: usize) -> usize {
        (l * self.dp + p) * self.dr + r
    }

    pub fn get(&self, l: usize, p: usize, r: usize) -> C64 {
        self.data[self.idx(l, p, r)]
    }

    pub fn set(&mut self, l: usize, p: usize, r: usize, v: C64) {
        let i = self.idx(l, p, r);
        self.data[i] = v;
    }
}

/// Open-boundary matrix product state over qubits. Site 0 is the
/// most significant bit of a basis index.
#[derive(Clone, Debug)]
pub struct MPS {
    pub sites: Vec<Tensor3>,
}

impl MPS {
    pub fn new_zero(n: usize) -> Self {
        let mut sites = Vec::with_capacity(n);
        for _ in 0..n {
            let mut t = Tensor3::zeros(1, 2, 1);
            t.set(0, 0, 0, ONE);
            sites.push(t);
        }
        Self { sites }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn apply_1q(&mut self, k: usize, u: [[C64; 2]; 2]) {
        let s = &self.sites[k];
        let mut out = Tensor3::zeros(s.dl, s.dp, s.dr);

        for l in 0..s.dl {
            for r in 0..s.dr {
                for p in 0..2 {
                    let mut acc = ZERO;
                    for pp in 0..2 {
                        acc += u[p][pp] * s.get(l, pp, r);
                    }
                    out.set(l, p, r, acc);
                }
            }
        }
        self.sites[k] = out;
    }

    /// Applies `u` to sites (k, k+1). Row/column index of `u` is
    /// `p_k * 2 + p_{k+1}`.
    pub fn apply_2q_svd(&mut self, k: usize, u: [[C64; 4]; 4], trunc: Truncation) {
        let a = &self.sites[k];
        let b = &self.sites[k + 1];
        let dl = a.dl;
        let dr = b.dr;

        let theta = two_site_block(a, b, &u);

        let svd = theta.thin_svd();
        let s = svd.s_diagonal();
        let s_vals: Vec<f64> = (0..s.nrows()).map(|i| s.read(i).re).collect();
        let kept = trunc.kept(&s_vals);

        let u_mat = svd.u();
        let v_mat = svd.v();

        // singular values are folded into the left site
        let mut new_a = Tensor3::zeros(dl, 2, kept);
        for l in 0..dl {
            for p in 0..2 {
                for m in 0..kept {
                    new_a.set(l, p, m, u_mat.read(l * 2 + p, m) * s_vals[m]);
                }
            }
        }

        let mut new_b = Tensor3::zeros(kept, 2, dr);
        for m in 0..kept {
            for p in 0..2 {
                for r in 0..dr {
                    new_b.set(m, p, r, v_mat.read(p * dr + r, m).conj());
                }
            }
        }

        self.sites[k] = new_a;
        self.sites[k + 1] = new_b;
    }

    /// Amplitude ⟨bits|ψ⟩, one physical index per site.
    pub fn amplitude(&self, bits: &[usize]) -> C64 {
        debug_assert_eq!(bits.len(), self.sites.len());

        let mut row = vec![ONE];
        for (site, &p) in self.sites.iter().zip(bits) {
            let mut next = vec![ZERO; site.dr];
            for (l, &lv) in row.iter().enumerate() {
                for (r, nv) in next.iter_mut().enumerate() {
                    *nv += lv * site.get(l, p, r);
                }
            }
            row = next;
        }
        row.iter().copied().sum()
    }

    /// Full state vector, basis index with site 0 as the most significant bit.
    pub fn amplitudes(&self) -> Vec<C64> {
        let n = self.sites.len();
        let mut bits = vec![0usize; n];
        (0..1usize << n)
            .map(|index| {
                for (q, bit) in bits.iter_mut().enumerate() {
                    *bit = (index >> (n - 1 - q)) & 1;
                }
                self.amplitude(&bits)
            })
            .collect()
    }

    pub fn max_bond(&self) -> usize {
        self.sites.iter().map(|s| s.dl.max(s.dr)).max().unwrap_or(1)
    }
}

/// Contracts sites a, b and applies the two-site gate, returning the
/// (dl·2) × (2·dr) matrix that is split again by SVD.
fn two_site_block(a: &Tensor3, b: &Tensor3, u: &[[C64; 4]; 4]) -> Mat<C64> {
    let dl = a.dl;
    let dr = b.dr;
    let chi = a.dr;

    let mut theta = Mat::<C64>::zeros(dl * 2, 2 * dr);
    for l in 0..dl {
        for r in 0..dr {
            for p1 in 0..2 {
                for p2 in 0..2 {
                    let mut v = ZERO;
                    for q1 in 0..2 {
                        for q2 in 0..2 {
                            let g = u[p1 * 2 + p2][q1 * 2 + q2];
                            if g == ZERO {
                                continue;
                            }
                            for m in 0..chi {
                                v += g * a.get(l, q1, m) * b.get(m, q2, r);
                            }
                        }
                    }
                    theta.write(l * 2 + p1, p2 * dr + r, v);
                }
            }
        }
    }
    theta
}
