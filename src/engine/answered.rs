/// Celda del flag "pregunta actual contestada", con notificación solo en
/// cambio real. Cualquiera puede publicar y cualquiera puede suscribirse;
/// publicar el valor que ya estaba no despierta a nadie.
///
/// Lleva además el aviso de primera respuesta completa: la primera vez que
/// el flag sube a `true` para la pregunta actual dispara sus listeners
/// dedicados una sola vez. `reset_for_question` lo rearma al cambiar de
/// pregunta.
pub struct AnsweredState {
    value: bool,
    first_answered_fired: bool,
    listeners: Vec<Box<dyn FnMut(bool)>>,
    first_answered_listeners: Vec<Box<dyn FnMut()>>,
}

impl Default for AnsweredState {
    fn default() -> Self {
        Self {
            value: false,
            first_answered_fired: false,
            listeners: Vec::new(),
            first_answered_listeners: Vec::new(),
        }
    }
}

impl AnsweredState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> bool {
        self.value
    }

    /// Publica un nuevo valor. Si coincide con el actual no pasa nada; si
    /// cambia, se guarda y se notifica a todos los suscriptores. La subida
    /// a `true` dispara además el aviso de primera respuesta, si este
    /// sigue armado.
    pub fn publish(&mut self, value: bool) {
        if value != self.value {
            self.value = value;
            for listener in &mut self.listeners {
                listener(value);
            }
        }
        if self.value && !self.first_answered_fired {
            self.first_answered_fired = true;
            for listener in &mut self.first_answered_listeners {
                listener();
            }
        }
    }

    /// Fija el valor sin notificar. Solo para sembrar el estado restaurado
    /// antes de que la primera pregunta se registre.
    pub fn seed(&mut self, value: bool) {
        self.value = value;
    }

    /// Al entrar en otra pregunta: el flag baja (notificando si estaba en
    /// `true`) y el aviso de primera respuesta vuelve a quedar armado.
    pub fn reset_for_question(&mut self) {
        self.publish(false);
        self.first_answered_fired = false;
    }

    pub fn on_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn on_first_answered(&mut self, listener: impl FnMut() + 'static) {
        self.first_answered_listeners.push(Box::new(listener));
    }
}
