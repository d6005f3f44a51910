/// Efecto visual que se dispara con cada respuesta correcta.
///
/// Es "dispara y olvida": el controlador no espera nada de vuelta y la
/// puntuación no depende de él. `()` sirve como efecto vacío.
pub trait Celebration {
    fn celebrate(&mut self);
}

impl Celebration for () {
    fn celebrate(&mut self) {}
}

impl<C: Celebration + ?Sized> Celebration for Box<C> {
    fn celebrate(&mut self) {
        (**self).celebrate();
    }
}

/// Cuenta las celebraciones recibidas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CelebrationCount(pub usize);

impl Celebration for CelebrationCount {
    fn celebrate(&mut self) {
        self.0 += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_effect_forwards_to_inner() {
        let mut boxed: Box<CelebrationCount> = Box::default();
        boxed.celebrate();
        boxed.celebrate();
        assert_eq!(*boxed, CelebrationCount(2));
    }
}
